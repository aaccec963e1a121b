use crate::error;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

// Every record type in the crate moves through these two functions; there
// is no other serialization path.

pub fn encode<T: Serialize>(value: &T) -> error::Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(error::Error::encoding_failure_from_serde)
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> error::Result<T> {
    serde_json::from_slice(bytes).map_err(|e| {
        debug!("Failed to decode response body {}", e);
        error::Error::decoding_failure_from_serde(e)
    })
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::results::usage::Usage;
    use crate::transcoding;

    #[test]
    fn test_decode_failure_is_reported_as_decoding() {
        let err = transcoding::decode::<Usage>(b"{\"features\":").unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::DecodingFailure(_)));
    }

    #[test]
    fn test_encode_then_decode_is_identity() {
        let usage = Usage {
            features: Some(2),
            text_characters: Some(1536),
            text_units: Some(1),
        };

        let bytes = transcoding::encode(&usage).unwrap();
        let decoded: Usage = transcoding::decode(&bytes).unwrap();

        assert_eq!(usage, decoded);
    }
}
