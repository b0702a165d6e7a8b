pub mod save_result;
