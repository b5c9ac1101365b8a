pub mod popularity;

pub use popularity::PopularityCounter;
