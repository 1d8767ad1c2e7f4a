use egui::Color32;

use crate::locale::Localized;

/// Ten-field technical spec sheet shown in the detail modal.
#[derive(Debug, Clone)]
pub struct SpecSheet {
    pub dimensions: String,
    pub weight: String,
    pub work_temp: String,
    pub voltage: String,
    pub current: String,
    pub fan_speed: String,
    pub pump_speed: String,
    pub coolant_concentration: String,
    pub coolant_freezing_point: String,
    pub coolant_ph: String,
}

impl SpecSheet {
    /// Label/value rows in display order.
    pub fn rows(&self) -> [(&'static str, &str); 10] {
        [
            ("Dimensions", &self.dimensions),
            ("Weight", &self.weight),
            ("Work Temp", &self.work_temp),
            ("Voltage", &self.voltage),
            ("Current", &self.current),
            ("Fan Speed", &self.fan_speed),
            ("Pump Speed", &self.pump_speed),
            ("Coolant Conc.", &self.coolant_concentration),
            ("Freezing Point", &self.coolant_freezing_point),
            ("Coolant PH", &self.coolant_ph),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub price_en: &'static str,
    pub price_cn: &'static str,
    pub price_vn: &'static str,
    /// Seed for the procedural product art.
    pub art_seed: &'static str,
    pub specs: SpecSheet,
}

impl Product {
    pub fn price(&self, lang: crate::locale::Language) -> &str {
        match lang {
            crate::locale::Language::En => self.price_en,
            crate::locale::Language::Cn => self.price_cn,
            crate::locale::Language::Vn => self.price_vn,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Brand {
    pub id: &'static str,
    pub name: Localized,
    pub origin: &'static str,
    /// Seed for the procedural backdrop art.
    pub bg_seed: &'static str,
    pub accent: Color32,
    pub description: Localized,
    pub products: Vec<Product>,
}

/// Spec sheets follow a fixed formula keyed on a per-product modifier, same
/// numbers the marketing team signed off on.
fn make_specs(modifier: u32) -> SpecSheet {
    SpecSheet {
        dimensions: format!("{}mm x 120mm x {}mm", 277 + modifier, 27 + modifier % 5),
        weight: format!("{:.1} kg", 1.2 + modifier as f64 * 0.1),
        work_temp: format!("5°C - {}°C", 60 + modifier),
        voltage: "12V DC".to_owned(),
        current: format!("{:.2}A", 0.3 + modifier as f64 * 0.05),
        fan_speed: format!("{} - {} RPM", 500 + modifier * 100, 2000 + modifier * 50),
        pump_speed: format!("{} RPM", 2800 + modifier * 50),
        coolant_concentration: "Propylene Glycol 35%".to_owned(),
        coolant_freezing_point: "-25°C".to_owned(),
        coolant_ph: "7.5 - 8.5".to_owned(),
    }
}

fn product(
    id: &'static str,
    name: &'static str,
    prices: (&'static str, &'static str, &'static str),
    art_seed: &'static str,
    modifier: u32,
) -> Product {
    Product {
        id,
        name,
        price_en: prices.0,
        price_cn: prices.1,
        price_vn: prices.2,
        art_seed,
        specs: make_specs(modifier),
    }
}

/// The full static catalog. Built once at startup.
pub fn brands() -> Vec<Brand> {
    vec![
        Brand {
            id: "corsair",
            name: Localized::new("Corsair", "美商海盗船", "Corsair"),
            origin: "California, USA",
            bg_seed: "california_tech",
            accent: Color32::from_rgb(0xFF, 0xFF, 0x00),
            description: Localized::new(
                "High-performance gear for gamers and content creators.",
                "为游戏玩家和创作者打造的高性能装备。",
                "Thiết bị hiệu suất cao cho game thủ và người sáng tạo.",
            ),
            products: vec![
                product("c-h150i", "iCUE H150i ELITE", ("$189.99", "¥1399", "4.500.000₫"), "corsair1", 1),
                product("c-h100i", "iCUE H100i RGB", ("$139.99", "¥999", "3.200.000₫"), "corsair2", 2),
                product("c-h170i", "iCUE H170i LCD", ("$259.99", "¥1999", "6.100.000₫"), "corsair3", 3),
            ],
        },
        Brand {
            id: "msi",
            name: Localized::new("MSI", "微星", "MSI"),
            origin: "Taipei, Taiwan",
            bg_seed: "taipei_neon",
            accent: Color32::from_rgb(0xFF, 0x00, 0x00),
            description: Localized::new(
                "True Gaming. Some are born for gaming, some are chosen.",
                "真正的游戏。有些是为游戏而生，有些是被选中。",
                "Chơi game đích thực. Sinh ra để chiến game.",
            ),
            products: vec![
                product("m-core360", "MAG CORELIQUID 360R", ("$129.99", "¥899", "3.100.000₫"), "msi1", 4),
                product("m-meg", "MEG CORELIQUID S360", ("$279.99", "¥2199", "6.800.000₫"), "msi2", 5),
                product("m-mpg", "MPG CORELIQUID K240", ("$199.99", "¥1499", "4.800.000₫"), "msi3", 6),
            ],
        },
        Brand {
            id: "asr",
            name: Localized::new("ASRock", "华擎", "ASRock"),
            origin: "Taipei, Taiwan",
            bg_seed: "factory_tech",
            accent: Color32::from_rgb(0x00, 0xFF, 0x00),
            description: Localized::new(
                "Innovative design and reliable performance.",
                "创新设计与可靠性能的结合。",
                "Thiết kế sáng tạo và hiệu suất đáng tin cậy.",
            ),
            products: vec![
                product("a-carrara", "Carrara Edition 360", ("$159.99", "¥1099", "3.800.000₫"), "asrock1", 7),
                product("a-lumen", "Lumen S24 RGB", ("$119.99", "¥799", "2.900.000₫"), "asrock2", 8),
                product("a-aqua", "AQUA 360", ("$199.99", "¥1499", "4.900.000₫"), "asrock3", 9),
            ],
        },
        Brand {
            id: "fd",
            name: Localized::new("Fractal Design", "分形工艺", "Fractal Design"),
            origin: "Gothenburg, Sweden",
            bg_seed: "nordic_interior",
            accent: Color32::from_rgb(0xFF, 0xFF, 0xFF),
            description: Localized::new(
                "Scandinavian design, silent cooling.",
                "斯堪的纳维亚设计，静音散热。",
                "Thiết kế Scandinavian, làm mát êm ái.",
            ),
            products: vec![
                product("f-celsius", "Celsius+ S36 Prisma", ("$199.99", "¥1499", "4.800.000₫"), "fractal1", 10),
                product("f-lumen", "Lumen S28 RGB", ("$139.99", "¥999", "3.400.000₫"), "fractal2", 11),
                product("f-aspect", "Aspect 12 RGB", ("$109.99", "¥749", "2.600.000₫"), "fractal3", 12),
            ],
        },
        Brand {
            id: "rog",
            name: Localized::new("ROG", "玩家国度", "ROG"),
            origin: "Taipei, Taiwan",
            bg_seed: "esports_arena",
            accent: Color32::from_rgb(0xFF, 0x00, 0x55),
            description: Localized::new(
                "Republic of Gamers. For those who dare.",
                "玩家国度。只为超越。",
                "Republic of Gamers. Dành cho những kẻ dám thách thức.",
            ),
            products: vec![
                product("r-ryujin", "ROG RYUJIN III 360", ("$349.99", "¥2699", "8.500.000₫"), "rog1", 13),
                product("r-strix", "ROG STRIX LC II", ("$189.99", "¥1399", "4.600.000₫"), "rog2", 14),
                product("r-ryuo", "ROG RYUO III", ("$249.99", "¥1899", "6.000.000₫"), "rog3", 15),
            ],
        },
        Brand {
            id: "nzxt",
            name: Localized::new("NZXT", "恩杰", "NZXT"),
            origin: "California, USA",
            bg_seed: "clean_setup",
            accent: Color32::from_rgb(0x88, 0x00, 0xFF),
            description: Localized::new(
                "Simplicity and performance for PC builders.",
                "为PC装机者提供简约与性能。",
                "Đơn giản và hiệu suất cho người lắp ráp PC.",
            ),
            products: vec![
                product("n-krakenz", "Kraken Elite 360", ("$279.99", "¥1999", "6.900.000₫"), "nzxt1", 16),
                product("n-krakenx", "Kraken 240 RGB", ("$159.99", "¥1199", "3.900.000₫"), "nzxt2", 17),
                product("n-120", "Kraken 120", ("$89.99", "¥599", "2.200.000₫"), "nzxt3", 18),
            ],
        },
        Brand {
            id: "valkyrie",
            name: Localized::new("Valkyrie", "瓦尔基里", "Valkyrie"),
            origin: "Shenzhen, China",
            bg_seed: "cyber_anime",
            accent: Color32::from_rgb(0x00, 0xCC, 0xFF),
            description: Localized::new(
                "Mythological power in your cooling system.",
                "散热系统中的神话力量。",
                "Sức mạnh thần thoại trong hệ thống làm mát của bạn.",
            ),
            products: vec![
                product("v-gl360", "Valkyrie GL360", ("$169.99", "¥1299", "4.100.000₫"), "valk1", 19),
                product("v-e360", "Valkyrie E360", ("$149.99", "¥1099", "3.600.000₫"), "valk2", 20),
                product("v-dragon", "Dragon AIO 240", ("$129.99", "¥899", "3.200.000₫"), "valk3", 21),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{Language, ALL_LANGUAGES};

    #[test]
    fn seven_brands_three_products_each() {
        let brands = brands();
        assert_eq!(brands.len(), 7);
        for brand in &brands {
            assert_eq!(brand.products.len(), 3);
            assert!(!brand.origin.is_empty());
            for lang in ALL_LANGUAGES {
                assert!(!brand.name.get(lang).is_empty());
                assert!(!brand.description.get(lang).is_empty());
            }
        }
    }

    #[test]
    fn ids_are_unique() {
        let brands = brands();
        let mut ids: Vec<&str> = brands
            .iter()
            .flat_map(|b| b.products.iter().map(|p| p.id))
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn spec_sheets_are_fully_populated() {
        for brand in brands() {
            for p in &brand.products {
                for (label, value) in p.specs.rows() {
                    assert!(!label.is_empty());
                    assert!(!value.is_empty(), "{} has empty {}", p.id, label);
                }
            }
        }
    }

    #[test]
    fn spec_formula_matches_known_values() {
        let s = make_specs(1);
        assert_eq!(s.dimensions, "278mm x 120mm x 28mm");
        assert_eq!(s.weight, "1.3 kg");
        assert_eq!(s.work_temp, "5°C - 61°C");
        assert_eq!(s.current, "0.35A");
        assert_eq!(s.fan_speed, "600 - 2050 RPM");
        assert_eq!(s.pump_speed, "2850 RPM");
    }

    #[test]
    fn prices_exist_in_all_locales() {
        for brand in brands() {
            for p in &brand.products {
                for lang in ALL_LANGUAGES {
                    assert!(!p.price(lang).is_empty());
                }
            }
        }
        // Spot check.
        let brands = brands();
        assert_eq!(brands[0].products[0].price(Language::Cn), "¥1399");
    }
}
