
pub mod scan {
    pub mod collector;
    pub mod engine;
    pub mod filter;
    pub mod lister;
    pub mod sink;
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod service {
    pub mod config_service;
}

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod utils {
    pub mod utils;
}
