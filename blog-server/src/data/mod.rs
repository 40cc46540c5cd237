pub mod post_repository;
