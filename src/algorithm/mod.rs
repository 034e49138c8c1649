/// Candidate bitsets for board cells
pub mod bitset;
/// Full reassembly pipeline from tiles to roughness
pub mod executor;
/// Edge matching and tile-usage propagation
pub mod propagation;
/// Backtracking layout search
pub mod solver;
