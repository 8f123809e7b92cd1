/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
This allows us to (1) save space by not using `usize` or `u64` and (2) directly index
per-node arrays (visited markers, root paths, local ids) without abstracting over nodes.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
