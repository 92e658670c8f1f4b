pub mod fizzbuzz;
