// COW string-keyed map over a character trie.
// Nodes live in an arena vector and link by index: `down` is the first
// child, `next` the sibling chain. Cloning the map clones the arena
// lazily through the shared box; node ids stay valid across detach.
// All walks are iterative, so deep keys cannot exhaust the stack.

use crate::array::StrArray;
use crate::cow::CowBox;
use crate::error::TextResult;
use crate::string::Str;
use crate::unit::Unit;

use std::path::Path;

type NodeId = usize;
const ROOT: NodeId = 0;

#[derive(Clone)]
struct Node<U: Unit> {
    c: U,
    next: Option<NodeId>,
    down: Option<NodeId>,
    value: Option<Str<U>>,
}

impl<U: Unit> Node<U> {
    fn new(c: U) -> Self {
        Node {
            c,
            next: None,
            down: None,
            value: None,
        }
    }
}

// How a node is reached: through its parent's down link or through the
// previous sibling's next link. Needed to unlink without back pointers.
#[derive(Clone, Copy)]
enum Link {
    Down(NodeId),
    Next(NodeId),
}

#[derive(Clone)]
pub(crate) struct TrieBuf<U: Unit> {
    nodes: Vec<Node<U>>,
    free: Vec<NodeId>,
    count: usize,
}

impl<U: Unit> TrieBuf<U> {
    fn new() -> Self {
        TrieBuf {
            nodes: vec![Node::new(U::NUL)],
            free: Vec::new(),
            count: 0,
        }
    }

    fn alloc(&mut self, c: U) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id].c = c;
                id
            }
            None => {
                self.nodes.push(Node::new(c));
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        let n = &mut self.nodes[id];
        n.c = U::NUL;
        n.next = None;
        n.down = None;
        n.value = None;
        self.free.push(id);
    }

    /// Node for `key`, following sibling chains, `None` when absent.
    fn find(&self, key: &[U]) -> Option<NodeId> {
        let mut parent = ROOT;
        for &ch in key {
            let mut cur = self.nodes[parent].down;
            let mut hit = None;
            while let Some(id) = cur {
                if self.nodes[id].c == ch {
                    hit = Some(id);
                    break;
                }
                cur = self.nodes[id].next;
            }
            parent = hit?;
        }
        Some(parent)
    }

    /// Node for `key`, growing missing nodes at the tail of each chain.
    fn find_or_create(&mut self, key: &[U]) -> NodeId {
        let mut parent = ROOT;
        for &ch in key {
            let mut last = None;
            let mut cur = self.nodes[parent].down;
            let mut hit = None;
            while let Some(id) = cur {
                if self.nodes[id].c == ch {
                    hit = Some(id);
                    break;
                }
                last = Some(id);
                cur = self.nodes[id].next;
            }
            parent = match hit {
                Some(id) => id,
                None => {
                    let nid = self.alloc(ch);
                    match last {
                        Some(l) => self.nodes[l].next = Some(nid),
                        None => self.nodes[parent].down = Some(nid),
                    }
                    nid
                }
            };
        }
        parent
    }

    /// Path to `key` with the incoming link of every node, for deletes.
    fn find_path(&self, key: &[U]) -> Option<Vec<(Link, NodeId)>> {
        let mut path = Vec::with_capacity(key.len());
        let mut parent = ROOT;
        for &ch in key {
            let mut prev = None;
            let mut cur = self.nodes[parent].down;
            let mut hit = None;
            while let Some(id) = cur {
                if self.nodes[id].c == ch {
                    hit = Some(id);
                    break;
                }
                prev = Some(id);
                cur = self.nodes[id].next;
            }
            let id = hit?;
            let link = match prev {
                Some(s) => Link::Next(s),
                None => Link::Down(parent),
            };
            path.push((link, id));
            parent = id;
        }
        Some(path)
    }
}

pub struct StrMap<U: Unit> {
    pub(crate) b: CowBox<TrieBuf<U>>,
}

pub type ByteMap = StrMap<u8>;
pub type WideMap = StrMap<u16>;

impl<U: Unit> StrMap<U> {
    pub fn new() -> Self {
        StrMap {
            b: CowBox::new(TrieBuf::new()),
        }
    }

    /// Number of keys.
    #[inline]
    pub fn count(&self) -> usize {
        self.b.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.b.count == 0
    }

    /// Number of handles currently sharing this map's storage.
    pub fn refs(&self) -> usize {
        self.b.refs()
    }

    pub fn undef(&mut self) {
        *self.b.detach() = TrieBuf::new();
    }

    pub fn clear(&mut self) {
        self.undef();
    }

    /// Store `value` under `key`, replacing any previous value. Empty keys
    /// are ignored.
    pub fn set(&mut self, key: &[U], value: &Str<U>) {
        if key.is_empty() {
            return;
        }
        let value = value.clone();
        let buf = self.b.detach();
        let id = buf.find_or_create(key);
        if buf.nodes[id].value.replace(value).is_none() {
            buf.count += 1;
        }
    }

    pub fn set_str(&mut self, key: &str, value: &str) {
        self.set(&U::units_from_str(key), &Str::from(value));
    }

    /// Value under `key` as a shared handle.
    pub fn get(&self, key: &[U]) -> Option<Str<U>> {
        if key.is_empty() {
            return None;
        }
        let id = self.b.find(key)?;
        self.b.nodes[id].value.clone()
    }

    pub fn get_str(&self, key: &str) -> Option<Str<U>> {
        self.get(&U::units_from_str(key))
    }

    pub fn exists(&self, key: &[U]) -> bool {
        if key.is_empty() {
            return false;
        }
        match self.b.find(key) {
            Some(id) => self.b.nodes[id].value.is_some(),
            None => false,
        }
    }

    /// Remove `key`. Nodes left with no value and no children are pruned
    /// back up the path and recycled.
    pub fn del(&mut self, key: &[U]) -> bool {
        if key.is_empty() {
            return false;
        }
        let Some(mut path) = self.b.find_path(key) else {
            return false;
        };
        let &(_, leaf) = match path.last() {
            Some(p) => p,
            None => return false,
        };
        if self.b.nodes[leaf].value.is_none() {
            return false;
        }

        let buf = self.b.detach();
        buf.nodes[leaf].value = None;
        buf.count -= 1;
        while let Some((link, id)) = path.pop() {
            let n = &buf.nodes[id];
            if n.value.is_some() || n.down.is_some() {
                break;
            }
            let nx = n.next;
            match link {
                Link::Down(p) => buf.nodes[p].down = nx,
                Link::Next(s) => buf.nodes[s].next = nx,
            }
            buf.release(id);
        }
        true
    }

    /// Remove every key starting with `prefix` (the prefix itself
    /// included) and return how many were dropped. An empty prefix clears
    /// the whole map.
    pub fn del_branch(&mut self, prefix: &[U]) -> usize {
        if prefix.is_empty() {
            let n = self.count();
            self.undef();
            return n;
        }
        let Some(path) = self.b.find_path(prefix) else {
            return 0;
        };
        let &(link, top) = match path.last() {
            Some(p) => p,
            None => return 0,
        };

        let buf = self.b.detach();
        let nx = buf.nodes[top].next;
        match link {
            Link::Down(p) => buf.nodes[p].down = nx,
            Link::Next(s) => buf.nodes[s].next = nx,
        }
        buf.nodes[top].next = None; // bridged to the parent chain already

        let mut removed = 0;
        let mut stack = vec![top];
        while let Some(id) = stack.pop() {
            if buf.nodes[id].value.is_some() {
                removed += 1;
            }
            if let Some(d) = buf.nodes[id].down {
                stack.push(d);
            }
            if let Some(s) = buf.nodes[id].next {
                stack.push(s);
            }
            buf.release(id);
        }
        buf.count -= removed;
        removed
    }

    /// Visit every key and value, children before siblings, with an
    /// explicit stack and a shared key accumulator.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&Str<U>, &Str<U>),
    {
        let nodes = &self.b.nodes;
        let mut acc: Str<U> = Str::new();
        let mut stack: Vec<(NodeId, usize)> = Vec::new();
        let mut cur = nodes[ROOT].down;
        loop {
            while let Some(id) = cur {
                let kl = acc.len();
                acc.push_unit(nodes[id].c);
                if let Some(v) = &nodes[id].value {
                    f(&acc, v);
                }
                stack.push((id, kl));
                cur = nodes[id].down;
            }
            loop {
                match stack.pop() {
                    None => return,
                    Some((id, kl)) => {
                        acc.sleft(kl);
                        if let Some(nx) = nodes[id].next {
                            cur = Some(nx);
                            break;
                        }
                    }
                }
            }
        }
    }

    pub fn keys_and_values(&self, keys: &mut StrArray<U>, values: &mut StrArray<U>) {
        self.for_each(|k, v| {
            keys.push(k);
            values.push(v);
        });
    }

    pub fn keys(&self) -> StrArray<U> {
        let mut arr = StrArray::new();
        self.for_each(|k, _| {
            arr.push(k);
        });
        arr
    }

    pub fn values(&self) -> StrArray<U> {
        let mut arr = StrArray::new();
        self.for_each(|_, v| {
            arr.push(v);
        });
        arr
    }

    /// Swap keys and values. Pairs are replayed back to front, so when two
    /// keys carry the same value the first pair in walk order wins.
    pub fn reverse(&mut self) {
        let ka = self.keys();
        let va = self.values();
        self.undef();
        let mut z = ka.count();
        while z > 0 {
            z -= 1;
            let v = va.get(z as isize);
            self.set(v.units(), &ka.get(z as isize));
        }
    }

    /// Add every pair of `other`, overwriting existing keys. Replayed back
    /// to front like [`StrMap::reverse`].
    pub fn merge(&mut self, other: &StrMap<U>) {
        let ka = other.keys();
        let va = other.values();
        let mut z = ka.count();
        while z > 0 {
            z -= 1;
            let k = ka.get(z as isize);
            self.set(k.units(), &va.get(z as isize));
        }
    }

    /// Add pairs from interleaved key, value elements. An odd trailing key
    /// gets an empty value.
    pub fn merge_array(&mut self, arr: &StrArray<U>) {
        let mut z = 0;
        while z < arr.count() {
            let k = arr.get(z as isize);
            let v = arr.get(z as isize + 1);
            self.set(k.units(), &v);
            z += 2;
        }
    }

    /// Merge pairs from a file of interleaved key and value lines.
    pub fn fload(&mut self, path: impl AsRef<Path>) -> TextResult<()> {
        let mut arr = StrArray::new();
        arr.fload(path)?;
        self.merge_array(&arr);
        Ok(())
    }

    /// Save as interleaved key and value lines.
    pub fn fsave(&self, path: impl AsRef<Path>) -> TextResult<()> {
        StrArray::from(self).fsave(path)
    }
}

impl<U: Unit> Default for StrMap<U> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cheap handle copy: shares the arena until either side mutates.
impl<U: Unit> Clone for StrMap<U> {
    fn clone(&self) -> Self {
        StrMap { b: self.b.share() }
    }
}

impl<U: Unit> std::fmt::Debug for StrMap<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut m = f.debug_map();
        self.for_each(|k, v| {
            m.entry(k, v);
        });
        m.finish()
    }
}
