// src/core.rs
pub mod arrange;
pub mod builder;
pub mod collapse;
pub mod filter;
pub mod fuse;
pub mod ignore;
pub mod pipeline;
pub mod reducer;
pub mod scanner;
