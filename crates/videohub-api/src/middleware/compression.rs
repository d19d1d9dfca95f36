//! Response compression layer.

use tower_http::compression::CompressionLayer;
use tower_http::compression::predicate::SizeAbove;

/// Bodies smaller than this are sent uncompressed.
const MIN_COMPRESSED_BODY_BYTES: u16 = 1024;

/// Builds a gzip layer that only kicks in for larger video listings.
pub fn build_compression_layer() -> CompressionLayer<SizeAbove> {
    CompressionLayer::new()
        .gzip(true)
        .compress_when(SizeAbove::new(MIN_COMPRESSED_BODY_BYTES))
}
