use crate::errors::WireError;

pub(super) fn slice(buf: &[u8], offset: usize, len: usize) -> Result<&[u8], WireError> {
    offset
        .checked_add(len)
        .and_then(|end| buf.get(offset..end))
        .ok_or(WireError::Truncated {
            offset,
            needed: len,
        })
}

pub(super) fn read_u8(buf: &[u8], offset: usize) -> Result<u8, WireError> {
    buf.get(offset)
        .copied()
        .ok_or(WireError::Truncated { offset, needed: 1 })
}

pub(super) fn read_u16(buf: &[u8], offset: usize) -> Result<u16, WireError> {
    let bytes = slice(buf, offset, 2)?;
    Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
}

pub(super) fn read_u32(buf: &[u8], offset: usize) -> Result<u32, WireError> {
    let bytes = slice(buf, offset, 4)?;
    Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}
