mod common;

mod classify;
mod resolve;
