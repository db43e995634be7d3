use fb2reader::{Fb2, Fb2Settings};
use std::io::Cursor;

pub const EXAMPLE_FB2: &str = "tests/ebooks/example.fb2";
const MINIMAL_FB2: &str = "tests/ebooks/minimal.fb2";
const INVALID_FB2: &str = "tests/ebooks/invalid.fb2";

const EXAMPLE_FB2_BYTES: &[u8] = include_bytes!("../../tests/ebooks/example.fb2");
const EXAMPLE_FB2_ZIP_BYTES: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/example.fb2.zip"));

pub enum TestFb2 {
    /// Fully populated document.
    ///
    /// Mapped to: [`EXAMPLE_FB2`]
    Example,
    /// [`Self::Example`] read from bytes rather than a path.
    ExampleBytes,
    /// [`Self::Example`] packed into a `.fb2.zip` by the build script.
    ExampleZip,
    /// Mapped to: [`MINIMAL_FB2`]
    Minimal,
    /// Document without a title.
    ///
    /// Intended for relaxed parsing (`strict` mode disabled).
    ///
    /// Mapped to: [`INVALID_FB2`]
    Invalid,
}

impl TestFb2 {
    pub fn open(self) -> Fb2 {
        self.build(|b| b)
    }

    pub fn build(
        self,
        builder: impl Fn(fb2reader::fb2::Fb2SettingsBuilder) -> fb2reader::fb2::Fb2SettingsBuilder,
    ) -> Fb2 {
        let settings = builder(Fb2Settings::builder());

        match self {
            Self::ExampleBytes => Fb2::read(Cursor::new(EXAMPLE_FB2_BYTES), settings),
            Self::ExampleZip => Fb2::read(Cursor::new(EXAMPLE_FB2_ZIP_BYTES), settings),
            Self::Example => Fb2::open_with(EXAMPLE_FB2, settings),
            Self::Minimal => Fb2::open_with(MINIMAL_FB2, settings),
            Self::Invalid => Fb2::open_with(INVALID_FB2, settings),
        }
        .unwrap()
    }
}
