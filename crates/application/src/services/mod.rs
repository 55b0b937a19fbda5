mod srv_selector;

pub use srv_selector::SrvSelector;
