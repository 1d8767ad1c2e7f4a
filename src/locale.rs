/// Display language for the showroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Cn,
    Vn,
}

pub const ALL_LANGUAGES: [Language; 3] = [Language::En, Language::Cn, Language::Vn];

impl Language {
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Cn => "CN",
            Language::Vn => "VN",
        }
    }
}

/// A string in all three locales.
#[derive(Debug, Clone)]
pub struct Localized {
    pub en: String,
    pub cn: String,
    pub vn: String,
}

impl Localized {
    pub fn new(en: &str, cn: &str, vn: &str) -> Self {
        Self {
            en: en.to_owned(),
            cn: cn.to_owned(),
            vn: vn.to_owned(),
        }
    }

    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::Cn => &self.cn,
            Language::Vn => &self.vn,
        }
    }
}

// Fixed navigation / product-detail labels.

pub fn nav_title(lang: Language) -> &'static str {
    match lang {
        Language::En => "AIO X-TREME SHOWROOM",
        Language::Cn => "极寒水冷展览馆",
        Language::Vn => "TRIỂN LÃM TẢN NHIỆT NƯỚC",
    }
}

pub fn toggle_theme(lang: Language) -> &'static str {
    match lang {
        Language::En => "SWITCH MODE",
        Language::Cn => "切换模式",
        Language::Vn => "CHẾ ĐỘ",
    }
}

pub fn back(lang: Language) -> &'static str {
    match lang {
        Language::En => "BACK TO SHOWROOM",
        Language::Cn => "返回展厅",
        Language::Vn => "QUAY LẠI",
    }
}

pub fn view_specs(lang: Language) -> &'static str {
    match lang {
        Language::En => "VIEW SPECS",
        Language::Cn => "查看参数",
        Language::Vn => "XEM THÔNG SỐ",
    }
}

pub fn specs_title(lang: Language) -> &'static str {
    match lang {
        Language::En => "TECHNICAL SPECIFICATIONS",
        Language::Cn => "技术规格详情",
        Language::Vn => "THÔNG SỐ KỸ THUẬT",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_every_label() {
        for lang in ALL_LANGUAGES {
            assert!(!nav_title(lang).is_empty());
            assert!(!toggle_theme(lang).is_empty());
            assert!(!back(lang).is_empty());
            assert!(!view_specs(lang).is_empty());
            assert!(!specs_title(lang).is_empty());
        }
    }

    #[test]
    fn localized_lookup() {
        let l = Localized::new("a", "b", "c");
        assert_eq!(l.get(Language::En), "a");
        assert_eq!(l.get(Language::Cn), "b");
        assert_eq!(l.get(Language::Vn), "c");
    }
}
