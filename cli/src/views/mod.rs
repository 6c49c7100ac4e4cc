pub mod footer_bar;
