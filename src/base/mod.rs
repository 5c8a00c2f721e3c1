mod encoding;

pub use self::encoding::AsciiCompatibleEncoding;
