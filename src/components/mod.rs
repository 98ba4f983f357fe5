pub mod action_list;
pub mod mind_map;
