pub mod combined_search;
pub mod search_data;
pub mod video_search;
