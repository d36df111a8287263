//! Hand-rolled ABI codec for the three WavePortal entry points and its one
//! event. The contract surface is tiny and fixed, so this covers exactly the
//! shapes it produces: `wave(string)`, `getAllWaves()` returning
//! `(address,uint256,string)[]`, `getTotalWaves()` returning `uint256`, and
//! `NewWave(address indexed,uint256,string)` logs.

use once_cell::sync::Lazy;
use sha3::{Digest, Keccak256};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AbiError {
    #[error("response truncated at byte {0}")]
    Truncated(usize),
    #[error("value at byte {0} does not fit in 64 bits")]
    UintOverflow(usize),
    #[error("invalid hex payload: {0}")]
    Hex(String),
    #[error("log is missing its indexed sender topic")]
    MissingTopic,
}

/// A wave exactly as the contract reports it, before the view layer decorates
/// it with a display color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveRecord {
    pub sender: String,
    pub timestamp: u64,
    pub message: String,
}

const WORD: usize = 32;

static WAVE_SELECTOR: Lazy<[u8; 4]> = Lazy::new(|| selector("wave(string)"));
static GET_ALL_WAVES_SELECTOR: Lazy<[u8; 4]> = Lazy::new(|| selector("getAllWaves()"));
static GET_TOTAL_WAVES_SELECTOR: Lazy<[u8; 4]> = Lazy::new(|| selector("getTotalWaves()"));
static NEW_WAVE_TOPIC: Lazy<String> = Lazy::new(|| {
    format!(
        "0x{}",
        hex::encode(keccak256(b"NewWave(address,uint256,string)"))
    )
});

fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

fn selector(signature: &str) -> [u8; 4] {
    let digest = keccak256(signature.as_bytes());
    [digest[0], digest[1], digest[2], digest[3]]
}

/// topic0 identifying `NewWave` logs, for `eth_newFilter`.
pub fn new_wave_topic() -> &'static str {
    &NEW_WAVE_TOPIC
}

pub fn get_all_waves_call() -> String {
    format!("0x{}", hex::encode(*GET_ALL_WAVES_SELECTOR))
}

pub fn get_total_waves_call() -> String {
    format!("0x{}", hex::encode(*GET_TOTAL_WAVES_SELECTOR))
}

/// Calldata for `wave(string)`: selector, head offset, then the length-prefixed
/// message padded to a word boundary.
pub fn wave_call(message: &str) -> String {
    let bytes = message.as_bytes();
    let mut out = Vec::with_capacity(4 + 2 * WORD + padded_len(bytes.len()));
    out.extend_from_slice(&*WAVE_SELECTOR);
    out.extend_from_slice(&uint_word_bytes(WORD as u64));
    out.extend_from_slice(&uint_word_bytes(bytes.len() as u64));
    out.extend_from_slice(bytes);
    out.resize(out.len() + padded_len(bytes.len()) - bytes.len(), 0);
    format!("0x{}", hex::encode(out))
}

/// Decodes a bare `uint256` return value, e.g. from `getTotalWaves()`.
pub fn decode_uint(data: &str) -> Result<u64, AbiError> {
    let bytes = decode_hex(data)?;
    read_uint(&bytes, 0)
}

/// Decodes the `getAllWaves()` return value in ledger order.
pub fn decode_wave_array(data: &str) -> Result<Vec<WaveRecord>, AbiError> {
    let bytes = decode_hex(data)?;
    let array_pos = read_uint(&bytes, 0)? as usize;
    let len = read_uint(&bytes, array_pos)? as usize;
    let elements = array_pos + WORD;
    if elements + len.saturating_mul(WORD) > bytes.len() {
        return Err(AbiError::Truncated(array_pos));
    }

    let mut waves = Vec::with_capacity(len);
    for i in 0..len {
        // Tuples holding a string are dynamic, so the array stores offsets
        // relative to the start of the element area.
        let elem = elements + read_uint(&bytes, elements + i * WORD)? as usize;
        let sender = read_address(&bytes, elem)?;
        let timestamp = read_uint(&bytes, elem + WORD)?;
        let message_pos = elem + read_uint(&bytes, elem + 2 * WORD)? as usize;
        let message = read_string(&bytes, message_pos)?;
        waves.push(WaveRecord {
            sender,
            timestamp,
            message,
        });
    }
    Ok(waves)
}

/// Decodes one `NewWave` log: the sender rides in the indexed topic, timestamp
/// and message in the data payload.
pub fn decode_new_wave_log(topics: &[String], data: &str) -> Result<WaveRecord, AbiError> {
    let sender_topic = topics.get(1).ok_or(AbiError::MissingTopic)?;
    let topic_bytes = decode_hex(sender_topic)?;
    if topic_bytes.len() != WORD {
        return Err(AbiError::Truncated(topic_bytes.len()));
    }
    let sender = format!("0x{}", hex::encode(&topic_bytes[12..]));

    let bytes = decode_hex(data)?;
    let timestamp = read_uint(&bytes, 0)?;
    let message_pos = read_uint(&bytes, WORD)? as usize;
    let message = read_string(&bytes, message_pos)?;
    Ok(WaveRecord {
        sender,
        timestamp,
        message,
    })
}

fn decode_hex(data: &str) -> Result<Vec<u8>, AbiError> {
    let stripped = data.strip_prefix("0x").unwrap_or(data);
    hex::decode(stripped).map_err(|e| AbiError::Hex(e.to_string()))
}

fn word_at(bytes: &[u8], offset: usize) -> Result<&[u8], AbiError> {
    bytes
        .get(offset..offset + WORD)
        .ok_or(AbiError::Truncated(offset))
}

fn read_uint(bytes: &[u8], offset: usize) -> Result<u64, AbiError> {
    let word = word_at(bytes, offset)?;
    if word[..WORD - 8].iter().any(|&b| b != 0) {
        return Err(AbiError::UintOverflow(offset));
    }
    let mut tail = [0u8; 8];
    tail.copy_from_slice(&word[WORD - 8..]);
    Ok(u64::from_be_bytes(tail))
}

fn read_address(bytes: &[u8], offset: usize) -> Result<String, AbiError> {
    let word = word_at(bytes, offset)?;
    Ok(format!("0x{}", hex::encode(&word[12..])))
}

fn read_string(bytes: &[u8], offset: usize) -> Result<String, AbiError> {
    let len = read_uint(bytes, offset)? as usize;
    let start = offset + WORD;
    let raw = bytes
        .get(start..start + len)
        .ok_or(AbiError::Truncated(start))?;
    // The ledger is not validated client-side, so tolerate bad UTF-8.
    Ok(String::from_utf8_lossy(raw).into_owned())
}

fn uint_word_bytes(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

fn padded_len(len: usize) -> usize {
    len.div_ceil(WORD) * WORD
}


#[cfg(test)]
mod tests {
    use super::*;

    // Standard Keccak-256(""), distinguishing Keccak from padded SHA3.
    #[test]
    fn keccak_matches_known_vector() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn call_payloads_start_with_their_selectors() {
        assert_eq!(get_all_waves_call().len(), 2 + 8);
        assert_eq!(get_total_waves_call().len(), 2 + 8);
        assert!(wave_call("hi").starts_with(&format!("0x{}", hex::encode(*WAVE_SELECTOR))));
    }

    #[test]
    fn wave_call_encodes_the_message() {
        let calldata = wave_call("hello");
        let bytes = decode_hex(&calldata).unwrap();
        // selector + offset word + length word + one padded data word
        assert_eq!(bytes.len(), 4 + 3 * WORD);
        assert_eq!(read_uint(&bytes[4..], 0).unwrap(), WORD as u64);
        assert_eq!(read_uint(&bytes[4..], WORD).unwrap(), 5);
        assert_eq!(&bytes[4 + 2 * WORD..4 + 2 * WORD + 5], b"hello");
        assert!(bytes[4 + 2 * WORD + 5..].iter().all(|&b| b == 0));
    }

    #[test]
    fn wave_call_pads_exact_word_messages_without_waste() {
        let calldata = wave_call(&"a".repeat(32));
        let bytes = decode_hex(&calldata).unwrap();
        assert_eq!(bytes.len(), 4 + 3 * WORD);
    }

    #[test]
    fn decodes_uint_returns() {
        assert_eq!(decode_uint(&fixtures::uint(0)).unwrap(), 0);
        assert_eq!(decode_uint(&fixtures::uint(1_234_567)).unwrap(), 1_234_567);
    }

    #[test]
    fn rejects_uints_wider_than_64_bits() {
        let data = format!("0x01{}", "00".repeat(31));
        assert_eq!(decode_uint(&data), Err(AbiError::UintOverflow(0)));
    }

    #[test]
    fn rejects_truncated_payloads() {
        assert_eq!(decode_uint("0xdead"), Err(AbiError::Truncated(0)));
        assert!(matches!(decode_uint("0xzz"), Err(AbiError::Hex(_))));
    }

    #[test]
    fn decodes_an_empty_wave_array() {
        let data = fixtures::wave_array(&[]);
        assert_eq!(decode_wave_array(&data).unwrap(), Vec::new());
    }

    #[test]
    fn decodes_waves_in_ledger_order() {
        let data = fixtures::wave_array(&[
            ("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", 1000, "hi"),
            (
                "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
                2000,
                "a message long enough to spill over one ABI word boundary",
            ),
        ]);
        let waves = decode_wave_array(&data).unwrap();
        assert_eq!(waves.len(), 2);
        assert_eq!(
            waves[0],
            WaveRecord {
                sender: "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa".into(),
                timestamp: 1000,
                message: "hi".into(),
            }
        );
        assert_eq!(waves[1].timestamp, 2000);
        assert_eq!(
            waves[1].message,
            "a message long enough to spill over one ABI word boundary"
        );
    }

    #[test]
    fn decodes_a_new_wave_log() {
        let topics = vec![
            new_wave_topic().to_owned(),
            fixtures::address_topic("0xcccccccccccccccccccccccccccccccccccccccc"),
        ];
        let wave =
            decode_new_wave_log(&topics, &fixtures::event_data(4242, "gm ☀️")).unwrap();
        assert_eq!(
            wave,
            WaveRecord {
                sender: "0xcccccccccccccccccccccccccccccccccccccccc".into(),
                timestamp: 4242,
                message: "gm ☀️".into(),
            }
        );
    }

    #[test]
    fn log_without_sender_topic_is_rejected() {
        let topics = vec![new_wave_topic().to_owned()];
        assert_eq!(
            decode_new_wave_log(&topics, &fixtures::event_data(1, "x")),
            Err(AbiError::MissingTopic)
        );
    }
}
