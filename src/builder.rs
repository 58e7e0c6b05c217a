use crate::log;
use crate::{fs::FileSystem, Locator, Options};

#[derive(Debug)]
pub struct LocatorBuilder {
    fs: Box<dyn FileSystem>,
}

impl LocatorBuilder {
    pub fn new(fs: Box<dyn FileSystem>) -> Self {
        LocatorBuilder { fs }
    }

    pub fn build(self, options: Options) -> Locator {
        log::enable_by_env();

        Locator { options, fs: self.fs }
    }
}
