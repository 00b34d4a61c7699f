use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Province-level region codes, the first two digits of an identity card number.
    static ref REGION_CODES: HashMap<&'static str, &'static str> = HashMap::from([
        ("11", "北京"),
        ("12", "天津"),
        ("13", "河北"),
        ("14", "山西"),
        ("15", "内蒙古"),
        ("21", "辽宁"),
        ("22", "吉林"),
        ("23", "黑龙江"),
        ("31", "上海"),
        ("32", "江苏"),
        ("33", "浙江"),
        ("34", "安徽"),
        ("35", "福建"),
        ("36", "江西"),
        ("37", "山东"),
        ("41", "河南"),
        ("42", "湖北"),
        ("43", "湖南"),
        ("44", "广东"),
        ("45", "广西"),
        ("46", "海南"),
        ("50", "重庆"),
        ("51", "四川"),
        ("52", "贵州"),
        ("53", "云南"),
        ("54", "西藏"),
        ("61", "陕西"),
        ("62", "甘肃"),
        ("63", "青海"),
        ("64", "宁夏"),
        ("65", "新疆"),
        ("71", "台湾"),
        ("81", "香港"),
        ("82", "澳门"),
        ("91", "国外"),
    ]);
}

/// Name of the region registered under `code`, if any.
pub fn region_name(code: &str) -> Option<&'static str> {
    REGION_CODES.get(code).copied()
}

pub fn is_known_region(code: &str) -> bool {
    REGION_CODES.contains_key(code)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_regions() {
        assert_eq!(region_name("11"), Some("北京"));
        assert_eq!(region_name("91"), Some("国外"));
        assert!(is_known_region("65"));
        assert_eq!(REGION_CODES.len(), 35);
    }

    #[test]
    fn unknown_regions() {
        for code in ["99", "00", "10", "16", "47", "72", "1", "111", "", "北京"] {
            assert!(!is_known_region(code), "{code} should be unknown");
            assert_eq!(region_name(code), None);
        }
    }
}
