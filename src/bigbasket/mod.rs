pub mod fetch_search_results;
