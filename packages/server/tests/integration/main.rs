mod common;
mod docs;
mod pattern;
mod problem;
mod seed;
mod storage;
mod user;
