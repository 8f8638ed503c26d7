//! Abstract factory: phone families.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::io::Write;

pub trait SmartPhone {
    fn model_details(&self) -> String;
}

pub trait NormalPhone {
    fn model_details(&self) -> String;
}

/// One family of phones: a smart phone and a normal phone that belong
/// together.
pub trait MobilePhoneFactory {
    fn smart_phone(&self) -> Box<dyn SmartPhone>;
    fn normal_phone(&self) -> Box<dyn NormalPhone>;
}

struct NokiaPixel;
struct Nokia1600;
struct SamsungGalaxy;
struct SamsungPro;

impl SmartPhone for NokiaPixel {
    fn model_details(&self) -> String {
        "Model: Nokia Pixel\nRAM: 3GB\nCamera: 8MP\n".to_string()
    }
}

impl SmartPhone for SamsungGalaxy {
    fn model_details(&self) -> String {
        "Model: Samsung Galaxy\nRAM: 2GB\nCamera: 13MP\n".to_string()
    }
}

impl NormalPhone for Nokia1600 {
    fn model_details(&self) -> String {
        "Model: Nokia 1600\nRAM: NA\nCamera: NA\n".to_string()
    }
}

impl NormalPhone for SamsungPro {
    fn model_details(&self) -> String {
        "Model: Samsung 2001 Pro\nRAM: NA\nCamera: NA\n".to_string()
    }
}

pub struct Nokia;
pub struct Samsung;

impl MobilePhoneFactory for Nokia {
    fn smart_phone(&self) -> Box<dyn SmartPhone> {
        Box::new(NokiaPixel)
    }

    fn normal_phone(&self) -> Box<dyn NormalPhone> {
        Box::new(Nokia1600)
    }
}

impl MobilePhoneFactory for Samsung {
    fn smart_phone(&self) -> Box<dyn SmartPhone> {
        Box::new(SamsungGalaxy)
    }

    fn normal_phone(&self) -> Box<dyn NormalPhone> {
        Box::new(SamsungPro)
    }
}

/// Only ever sees the abstract factory and products.
pub struct MobileClient {
    smart_phone: Box<dyn SmartPhone>,
    normal_phone: Box<dyn NormalPhone>,
}

impl MobileClient {
    pub fn new(factory: &dyn MobilePhoneFactory) -> Self {
        Self {
            smart_phone: factory.smart_phone(),
            normal_phone: factory.normal_phone(),
        }
    }

    pub fn smart_phone_details(&self) -> String {
        self.smart_phone.model_details()
    }

    pub fn normal_phone_details(&self) -> String {
        self.normal_phone.model_details()
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let factories: [(&str, &dyn MobilePhoneFactory); 2] =
        [("NOKIA", &Nokia), ("SAMSUNG", &Samsung)];
    for (brand, factory) in factories {
        let client = MobileClient::new(factory);
        writeln!(out, "********* {brand} *********")?;
        writeln!(out, "{}", client.smart_phone_details())?;
        writeln!(out, "{}", client.normal_phone_details())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_families_stay_together() {
        let nokia = MobileClient::new(&Nokia);
        assert_eq!(nokia.smart_phone_details(), "Model: Nokia Pixel\nRAM: 3GB\nCamera: 8MP\n");
        assert!(nokia.normal_phone_details().starts_with("Model: Nokia 1600"));

        let samsung = MobileClient::new(&Samsung);
        assert!(samsung.smart_phone_details().starts_with("Model: Samsung Galaxy"));
        assert!(samsung.normal_phone_details().starts_with("Model: Samsung 2001 Pro"));
    }

    #[test]
    fn test_demo_runs() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("********* NOKIA *********\n"));
        assert!(text.contains("********* SAMSUNG *********\n"));
    }
}
