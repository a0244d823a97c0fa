pub mod haunted_list;
