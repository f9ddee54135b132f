mod catalog;
mod config;
mod rounds;
