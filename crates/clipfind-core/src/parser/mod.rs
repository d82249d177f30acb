pub mod heuristic;

pub use heuristic::HeuristicParser;
