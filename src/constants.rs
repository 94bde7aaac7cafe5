pub mod pagination {

    pub const DEFAULT_PAGE: u64 = 1;

    pub const DEFAULT_PAGE_SIZE: u64 = 10;

    pub const MAX_PAGE_SIZE: u64 = 50;
}
