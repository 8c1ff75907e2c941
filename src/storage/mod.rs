mod kv;

pub use kv::KvStore;
