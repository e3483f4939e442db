/// Counts reported by a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub products_deleted: usize,
    pub users_deleted: usize,
    pub products_created: usize,
    pub users_created: usize,
}
