pub mod std_random;
