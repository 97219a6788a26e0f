pub mod memory_live_repo;
