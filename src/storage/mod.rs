pub(crate) mod on_disk;
