/*!
# Node Mapper

Maps nodes of a graph onto the nodes of a (smaller) graph and back.
Materialized cycles are stored with local ids `0..k`; the mapper keeps the
correspondence to the ids of the input graph.
*/
use crate::{edge::*, node::*};

use fxhash::FxHashMap;
use itertools::Itertools;
use std::fmt;

/// A trait for constructing node mappings.
pub trait NodeMapSetter: Sized {
    /// Creates a mapper where the largest node that can be inserted is `n-1`.
    fn with_capacity(n: NumNodes) -> Self;

    /// Stores a mapping `old <-> new`.
    /// ** Panics if either `old` or `new` is already mapped **
    fn map_node_to(&mut self, old: Node, new: Node);

    /// Assigns new ids `0, 1, 2, ...` to the nodes of `old_ids` in order of first occurrence.
    /// Repeated nodes keep the id of their first occurrence.
    ///
    /// # Example
    /// ```
    /// use ucycles::utils::*;
    ///
    /// let mapper = NodeMapper::from_first_occurrence([7, 3, 7, 5]);
    /// assert_eq!(mapper.new_id_of(7), Some(0));
    /// assert_eq!(mapper.new_id_of(5), Some(2));
    /// assert_eq!(mapper.old_id_of(1), Some(3));
    /// ```
    fn from_first_occurrence<I>(old_ids: I) -> Self
    where
        I: IntoIterator<Item = Node>,
        Self: NodeMapGetter,
    {
        let old_ids = old_ids.into_iter();
        let mut res = Self::with_capacity(old_ids.size_hint().0 as NumNodes);
        for old in old_ids {
            if res.new_id_of(old).is_none() {
                let new = res.len();
                res.map_node_to(old, new);
            }
        }
        res
    }
}

/// A trait for accessing node mappings.
pub trait NodeMapGetter {
    /// If the mapping `(old, new)` exists, returns `Some(new)`, otherwise `None`.
    fn new_id_of(&self, old: Node) -> Option<Node>;

    /// If the mapping `(old, new)` exists, returns `Some(old)`, otherwise `None`.
    fn old_id_of(&self, new: Node) -> Option<Node>;

    /// Returns the number of stored mappings
    fn len(&self) -> Node;

    /// Returns `true` if no mapping is stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Applies [`NodeMapGetter::old_id_of`] to each item and drops items without mapping
    fn get_filtered_old_ids<I>(&self, new_ids: I) -> impl Iterator<Item = Node>
    where
        I: IntoIterator<Item = Node>,
    {
        new_ids.into_iter().filter_map(|u| self.old_id_of(u))
    }

    /// Relabels every edge whose endpoints are both mapped; other edges are dropped.
    ///
    /// # Example
    /// ```
    /// use ucycles::{prelude::*, utils::*};
    ///
    /// let mapper = NodeMapper::from_first_occurrence([4, 2]);
    /// let edges: Vec<Edge> = mapper.relabelled_edges([Edge(2, 4), Edge(4, 9)]).collect();
    /// assert_eq!(edges, vec![Edge(1, 0)]);
    /// ```
    fn relabelled_edges<I>(&self, old_edges: I) -> impl Iterator<Item = Edge>
    where
        I: IntoIterator<Item = Edge>,
    {
        old_edges
            .into_iter()
            .filter_map(|Edge(u, v)| Some(Edge(self.new_id_of(u)?, self.new_id_of(v)?)))
    }
}

/// A bidirectional node mapping between "old" and "new" nodes.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct NodeMapper {
    new_to_old: FxHashMap<Node, Node>,
    old_to_new: FxHashMap<Node, Node>,
}

impl NodeMapSetter for NodeMapper {
    fn with_capacity(n: Node) -> Self {
        Self {
            new_to_old: FxHashMap::with_capacity_and_hasher(n as usize, Default::default()),
            old_to_new: FxHashMap::with_capacity_and_hasher(n as usize, Default::default()),
        }
    }

    fn map_node_to(&mut self, old: Node, new: Node) {
        let success = self.old_to_new.insert(old, new).is_none()
            && self.new_to_old.insert(new, old).is_none();
        assert!(success);
    }
}

impl NodeMapGetter for NodeMapper {
    fn new_id_of(&self, old: Node) -> Option<Node> {
        self.old_to_new.get(&old).copied()
    }

    fn old_id_of(&self, new: Node) -> Option<Node> {
        self.new_to_old.get(&new).copied()
    }

    fn len(&self) -> Node {
        self.old_to_new.len() as Node
    }
}

impl fmt::Debug for NodeMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]",
            self.old_to_new
                .iter()
                .sorted()
                .map(|(&o, &n)| format!("{o}<->{n}"))
                .join(", ")
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_node_mapper() {
        let mut mapper = NodeMapper::with_capacity(10);
        assert!(mapper.is_empty());
        for x in 0..5 {
            mapper.map_node_to(2 * x, x);
            assert_eq!(mapper.len(), x + 1);
        }

        let result: Vec<Option<Node>> = (0..6).map(|x| mapper.new_id_of(x)).collect();
        assert_eq!(result, [Some(0), None, Some(1), None, Some(2), None]);
        assert_eq!(
            mapper.get_filtered_old_ids([4, 0, 9]).collect_vec(),
            vec![8, 0]
        );
        assert_eq!(format!("{mapper:?}"), "[0<->0, 2<->1, 4<->2, 6<->3, 8<->4]");
    }

    #[test]
    #[should_panic]
    fn double_mapping_panics() {
        let mut mapper = NodeMapper::with_capacity(2);
        mapper.map_node_to(0, 1);
        mapper.map_node_to(0, 0);
    }
}
