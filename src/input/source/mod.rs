pub mod spacenav;
