pub mod candidate_repo;
