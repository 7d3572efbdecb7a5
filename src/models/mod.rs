pub mod bs;
