use embkit_convert::{ascii_to_integer, integer_to_ascii, ConvertError, MAX_ASCII_LEN};

#[test]
fn rendered_text_parses_back_through_caller_buffer() {
    let mut buf = [0u8; MAX_ASCII_LEN];
    for &(value, base) in &[
        (0, 10),
        (-42, 10),
        (1_000_000, 10),
        (0x7F, 16),
        (511, 8),
        (35, 2),
        (-123_456, 10),
        (-5, 7),
    ] {
        let written = integer_to_ascii(value, &mut buf, base).unwrap();
        assert_eq!(buf[written - 1], 0, "terminator for {value} base {base}");
        let digits = (written - 1) as u8;
        assert_eq!(ascii_to_integer(&buf, digits, base), Ok(value));
    }
}

#[test]
fn buffer_reuse_does_not_leak_previous_digits() {
    let mut buf = [0u8; MAX_ASCII_LEN];
    integer_to_ascii(i32::MIN, &mut buf, 2).unwrap();
    let written = integer_to_ascii(3, &mut buf, 10).unwrap();
    assert_eq!(&buf[..written], b"3\0");
}

#[test]
fn parse_failure_is_not_zero() {
    let result = ascii_to_integer(b"0z", 2, 16);
    assert!(matches!(result, Err(ConvertError::InvalidDigit { byte: b'z', .. })));
    assert_ne!(result, Ok(0));
}

#[test]
fn every_base_renders_its_own_radix_as_ten() {
    let mut buf = [0u8; MAX_ASCII_LEN];
    for base in 2..=16u32 {
        let written = integer_to_ascii(base as i32, &mut buf, base).unwrap();
        assert_eq!(&buf[..written], b"10\0", "base {base}");
    }
}
