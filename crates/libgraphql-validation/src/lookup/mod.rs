mod fragments;
mod index_pool;
#[allow(clippy::module_inception)]
mod lookup;
mod selections;
mod types;
mod values;

pub use index_pool::IndexPool;
pub use lookup::Lookup;
pub use selections::CollectedFields;
pub use selections::DifferingSelectionSets;
pub use selections::TypedSet;

#[cfg(test)]
mod tests;
