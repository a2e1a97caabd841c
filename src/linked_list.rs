use std::fmt;

/// Printed after the last value, where a successor would otherwise go.
pub const END_MARKER: &str = "<end>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// pop_front or pop_back was called on a list with no nodes. The list is left untouched.
    Underflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Underflow => write!(f, "cannot pop from an empty list"),
        }
    }
}

impl std::error::Error for Error {}

/// A singly linked list of `i32` values.
///
/// Every node is owned by the node before it (the first node is owned by the list), so a list
/// can be moved but never duplicated: there is no `Clone` or `Copy` impl, and two lists can
/// never end up sharing a chain.
pub struct LinkedList {
    head: Link,
    size: usize,
}

/// Owning reference to the next node in the chain, or None at the end.
type Link = Option<Box<Node>>;

struct Node {
    value: i32,
    next: Link,
}

impl Node {
    pub fn new(value: i32, next: Link) -> Node {
        Node { value, next }
    }
}

impl Default for LinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkedList {
    pub fn new() -> LinkedList {
        LinkedList {
            head: None,
            size: 0,
        }
    }

    pub fn get_size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.get_size() == 0
    }

    /// Inserts `value` as the new first element. O(1).
    pub fn push_front(&mut self, value: i32) {
        let new_node: Box<Node> = Box::new(Node::new(value, self.head.take()));
        self.head = Some(new_node);
        self.size += 1;
    }

    /// Inserts `value` as the new last element. There is no tail pointer, so this walks the
    /// whole chain to find the last node: O(n).
    pub fn push_back(&mut self, value: i32) {
        let mut current: &mut Link = &mut self.head;
        while let Some(node) = current {
            current = &mut node.next;
        }
        *current = Some(Box::new(Node::new(value, None)));
        self.size += 1;
    }

    /// Removes the first element and returns its value. O(1).
    ///
    /// Returns Err(Error::Underflow) if the list is empty.
    pub fn pop_front(&mut self) -> Result<i32, Error> {
        let value = unlink(&mut self.head).ok_or_else(|| {
            log::trace!("pop_front on an empty list");
            Error::Underflow
        })?;
        self.size -= 1;
        Ok(value)
    }

    /// Removes the last element and returns its value.
    ///
    /// A node does not know its predecessor, so the link pointing at the last node can only be
    /// found by walking from the front: O(n). Returns Err(Error::Underflow) if the list is empty.
    pub fn pop_back(&mut self) -> Result<i32, Error> {
        let value = find_link(&mut self.head, |node| node.next.is_none())
            .and_then(unlink)
            .ok_or_else(|| {
                log::trace!("pop_back on an empty list");
                Error::Underflow
            })?;
        self.size -= 1;
        Ok(value)
    }

    /// Returns true if some node holds `value`. Stops at the first match.
    pub fn contains(&self, value: i32) -> bool {
        let mut current: &Link = &self.head;
        while let Some(node) = current {
            if node.value == value {
                return true;
            }
            current = &node.next;
        }
        false
    }

    /// Removes the first node (from the front) holding `value`. Returns whether a node was
    /// removed; a missing value leaves the list as it was.
    pub fn remove(&mut self, value: i32) -> bool {
        let removed = find_link(&mut self.head, |node| node.value == value).and_then(unlink);
        if removed.is_some() {
            self.size -= 1;
        }
        removed.is_some()
    }

    /// Prints the list to stdout, e.g. `1 -> 2 -> <end>`.
    pub fn print(&self) {
        println!("{}", self);
    }

    #[cfg(test)]
    fn reachable_nodes(&self) -> usize {
        let mut count = 0;
        let mut current: &Link = &self.head;
        while let Some(node) = current {
            count += 1;
            current = &node.next;
        }
        count
    }
}

/// Walks the chain starting at `link` and returns the link that owns the first node matching
/// `pred`. That is `link` itself when the first node matches, otherwise the `next` field of the
/// matching node's predecessor.
fn find_link<P>(mut link: &mut Link, mut pred: P) -> Option<&mut Link>
where
    P: FnMut(&Node) -> bool,
{
    loop {
        let matched = match link.as_deref() {
            Some(node) => pred(node),
            None => return None,
        };
        if matched {
            return Some(link);
        }
        match link {
            Some(node) => link = &mut node.next,
            None => return None,
        }
    }
}

/// Detaches the node held by `link`, moves its successor into `link` and returns the detached
/// value. The node is released here.
fn unlink(link: &mut Link) -> Option<i32> {
    let mut node = link.take()?;
    *link = node.next.take();
    Some(node.value)
}

impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current: &Link = &self.head;
        loop {
            match current {
                Some(node) => {
                    write!(f, "{} -> ", node.value)?;
                    current = &node.next;
                }
                None => break,
            }
        }
        write!(f, "{}", END_MARKER)
    }
}

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinkedList(size {}: {})", self.size, self)
    }
}

impl Drop for LinkedList {
    // Release front to back so a long chain doesn't recurse through Box<Node>'s drop glue.
    fn drop(&mut self) {
        let mut released = 0;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            released += 1;
        }
        debug_assert_eq!(released, self.size);
        log::trace!("released {} nodes", released);
    }
}
