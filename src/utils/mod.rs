pub mod listutil;
