pub const EMPTY_VALUE: &str = "---";

pub fn asn_to_dotted(asn: u32) -> String {
    if asn <= 65535 {
        format!("{}", asn)
    } else {
        format!("{}.{}", asn >> 16, asn & 0xffff)
    }
}

/// Parse an ASN in either asplain ("4259840100") or asdot ("65000.100") notation
pub fn asn_from_str(s: &str) -> Option<u32> {
    let s = s.trim();
    // str::parse accepts a leading '+', Junos never writes one
    if s.contains('+') {
        return None;
    }
    match s.split_once('.') {
        Some((high, low)) => {
            let high: u16 = high.parse().ok()?;
            let low: u16 = low.parse().ok()?;
            Some((u32::from(high) << 16) + u32::from(low))
        }
        None => s.parse().ok(),
    }
}
