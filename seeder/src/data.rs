//! The retailer's static marketing catalog. The content-managed pages read
//! these documents from the store; this module is their source of truth.

use shared::{
    CatalogBrand, CatalogIcon, CatalogProduct, CatalogService, CatalogTestimonial,
    ServicePricing,
};

fn pricing(amount: &str, pricing_type: &str) -> Option<ServicePricing> {
    Some(ServicePricing {
        amount: amount.into(),
        pricing_type: pricing_type.into(),
    })
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn services() -> Vec<CatalogService> {
    let mut entries = Vec::new();
    let mut service = |title: &str,
                       slug: &str,
                       short_description: &str,
                       icon: CatalogIcon,
                       category: &str,
                       highlights: &[&str],
                       pricing: Option<ServicePricing>,
                       delivery_time: &str| {
        entries.push(CatalogService {
            title: title.into(),
            slug: slug.into(),
            short_description: short_description.into(),
            icon,
            category: category.into(),
            order: entries.len() as u32 + 1,
            highlights: strings(highlights),
            pricing,
            delivery_time: Some(delivery_time.into()),
        });
    };

    service(
        "Custom PC Build — Gaming & Office PCs",
        "custom-pc-build",
        "Tailor-made gaming and office PC builds with performance parts, testing, warranty and local support in Indore.",
        CatalogIcon::Desktop,
        "hardware",
        &[
            "Custom configurations based on budget",
            "Quality branded components",
            "Professional cable management",
            "1-year warranty included",
        ],
        pricing("₹25,000", "starting"),
        "2-3 Days",
    );
    service(
        "Laptop/All-in-One PC Services",
        "laptop-services",
        "Comprehensive laptop repair, upgrade, and maintenance services. Screen replacement, RAM upgrade, SSD installation, and more.",
        CatalogIcon::Laptop,
        "hardware",
        &[
            "Expert technicians",
            "Genuine spare parts",
            "Quick turnaround time",
            "Data safety guaranteed",
        ],
        None,
        "Same Day to 3 Days",
    );
    service(
        "Personal Server & NAS Solution for SME",
        "server-nas-solution",
        "Enterprise-grade storage and server solutions for small and medium businesses. Data backup, file sharing, and remote access.",
        CatalogIcon::Server,
        "networking",
        &[
            "Business-grade reliability",
            "Secure data storage",
            "24/7 remote access",
            "Expert setup and support",
        ],
        pricing("₹35,000", "starting"),
        "3-5 Days",
    );
    service(
        "Networking Service — Custom Solutions",
        "networking-solutions",
        "Professional networking setup for homes and businesses. LAN installation, WiFi configuration, router setup, and network security.",
        CatalogIcon::Network,
        "networking",
        &[
            "Structured cabling",
            "High-speed network setup",
            "Secure WiFi configuration",
            "Remote monitoring options",
        ],
        None,
        "1-3 Days",
    );
    service(
        "All Printer Retail Services / Toner Replacement",
        "printer-services",
        "Complete printer solutions: sales, repair, maintenance, and genuine toner replacement for all brands.",
        CatalogIcon::Printer,
        "hardware",
        &[
            "All major brands supported",
            "Genuine consumables",
            "Quick service response",
            "Competitive pricing",
        ],
        None,
        "Same Day to 2 Days",
    );
    service(
        "Online Desktop/Remote Support",
        "remote-support",
        "Expert technical assistance over the wire. Software installation, troubleshooting, virus removal, and system optimization.",
        CatalogIcon::Headset,
        "support",
        &[
            "Instant support available",
            "No travel time",
            "Secure remote sessions",
            "Pay per session",
        ],
        pricing("₹300/hour", "hourly"),
        "Immediate",
    );
    service(
        "AMC (Annual Maintenance Contract)",
        "annual-maintenance-contract",
        "Yearly maintenance plans for offices and shops. Priority support, scheduled checkups, and discounted repairs.",
        CatalogIcon::Contract,
        "support",
        &[
            "Priority response",
            "Scheduled preventive maintenance",
            "Discounted spare parts",
            "Dedicated support contact",
        ],
        pricing("₹5,000/year", "starting"),
        "Immediate activation",
    );
    service(
        "All Types CCTV Camera Fitting and Services",
        "cctv-installation",
        "CCTV supply, installation and servicing for homes, shops and offices, with remote viewing setup.",
        CatalogIcon::Camera,
        "security",
        &[
            "All camera types supported",
            "Professional installation",
            "Mobile viewing setup",
            "After-sales service",
        ],
        pricing("₹15,000", "starting"),
        "2-3 Days",
    );
    service(
        "Virus Removal and Installation",
        "virus-removal-installation",
        "Malware cleanup, antivirus installation, and OS reinstallation with data preserved wherever possible.",
        CatalogIcon::Shield,
        "software",
        &[
            "Thorough malware cleanup",
            "Licensed antivirus options",
            "OS installation and updates",
            "Data safety first",
        ],
        pricing("₹500 - ₹1,500", "fixed"),
        "Same Day",
    );
    service(
        "Data Backup",
        "data-backup-services",
        "Backup strategy, recovery and migration services for individuals and SMEs.",
        CatalogIcon::Database,
        "support",
        &[
            "Scheduled backups",
            "Cloud and local options",
            "Recovery assistance",
            "Migration support",
        ],
        pricing("₹1,000", "starting"),
        "1-2 Days",
    );
    service(
        "Provide Consultation on PC, Laptops, and Peripherals",
        "it-consultation",
        "Honest purchase advice on PCs, laptops and peripherals matched to your budget and workload.",
        CatalogIcon::Consultant,
        "consultation",
        &[
            "Budget-fit recommendations",
            "No-pressure advice",
            "Configuration planning",
            "Upgrade roadmaps",
        ],
        pricing("Free consultation", "custom"),
        "Immediate",
    );

    entries
}

pub fn products() -> Vec<CatalogProduct> {
    let mut entries = Vec::new();
    let mut product = |title: &str,
                       slug: &str,
                       description: &str,
                       icon: CatalogIcon,
                       category: &str,
                       features: &[&str],
                       price_range: &str,
                       availability: &str,
                       warranty: &str| {
        entries.push(CatalogProduct {
            title: title.into(),
            slug: slug.into(),
            description: description.into(),
            icon,
            category: category.into(),
            features: strings(features),
            price_range: Some(price_range.into()),
            availability: Some(availability.into()),
            warranty: Some(warranty.into()),
        });
    };

    product(
        "Custom PC",
        "custom-pc",
        "Build your dream PC with our custom configuration service. Choose your components and we'll assemble it perfectly.",
        CatalogIcon::Desktop,
        "custom-pc",
        &[
            "Latest generation processors",
            "High-performance graphics cards",
            "RGB lighting options",
            "Professional cable management",
        ],
        "Starting from ₹25,000",
        "made-to-order",
        "1 Year Standard Warranty",
    );
    product(
        "Laptops",
        "laptops",
        "Wide range of laptops from all major brands. Business, gaming, and personal laptops with warranty and support.",
        CatalogIcon::Laptop,
        "laptop",
        &[
            "All major brands available",
            "Student to professional range",
            "Gaming laptops",
            "Business notebooks",
        ],
        "₹25,000 - ₹1,50,000",
        "in-stock",
        "1-3 Years (varies by brand)",
    );
    product(
        "Monitors",
        "monitors",
        "Office, gaming and professional monitors in every size and refresh rate.",
        CatalogIcon::Monitor,
        "monitor",
        &[
            "Full HD to 4K panels",
            "High refresh gaming monitors",
            "Color-accurate displays",
        ],
        "₹5,000 - ₹50,000",
        "in-stock",
        "1-3 Years",
    );
    product(
        "Printers",
        "printers",
        "Inkjet, laser and multifunction printers with genuine consumables.",
        CatalogIcon::Printer,
        "printer",
        &[
            "Home and office models",
            "Ink tank economy printers",
            "Genuine cartridges and toner",
        ],
        "₹3,000 - ₹50,000",
        "in-stock",
        "1 Year + Extended options",
    );
    product(
        "CCTV",
        "cctv-systems",
        "Complete CCTV packages: cameras, DVR/NVR, cabling and installation.",
        CatalogIcon::Camera,
        "cctv",
        &[
            "HD and IP camera options",
            "Night vision models",
            "Mobile viewing support",
        ],
        "Starting from ₹15,000",
        "in-stock",
        "1 Year",
    );
    product(
        "Hard Disk and SSD/NVMe",
        "storage-devices",
        "Internal and external storage: hard disks, SATA SSDs and NVMe drives.",
        CatalogIcon::Storage,
        "storage",
        &[
            "All capacities stocked",
            "NVMe Gen3/Gen4 drives",
            "External backup drives",
        ],
        "₹1,500 - ₹25,000",
        "in-stock",
        "3-5 Years (varies by brand)",
    );
    product(
        "RAM",
        "ram-memory",
        "Desktop and laptop memory modules across generations and speeds.",
        CatalogIcon::Memory,
        "memory",
        &[
            "DDR3/DDR4/DDR5 modules",
            "Laptop SO-DIMMs",
            "Matched kits for dual channel",
        ],
        "₹1,200 - ₹15,000",
        "in-stock",
        "Lifetime (most brands)",
    );
    product(
        "Networking Cable",
        "networking-cables",
        "Cat5e/Cat6 cable, patch cords, connectors and crimping accessories.",
        CatalogIcon::Cable,
        "networking",
        &[
            "Per-meter and boxed cable",
            "Factory-made patch cords",
            "Connectors and keystones",
        ],
        "₹15 - ₹5,000",
        "in-stock",
        "Varies by product",
    );
    product(
        "All Peripherals",
        "computer-peripherals",
        "Keyboards, mice, webcams, speakers and every accessory a desk needs.",
        CatalogIcon::Keyboard,
        "peripherals",
        &[
            "Wired and wireless options",
            "Gaming peripherals",
            "Webcams and headsets",
        ],
        "₹200 - ₹10,000",
        "in-stock",
        "6 Months to 2 Years",
    );
    product(
        "WiFi Routers",
        "wifi-routers",
        "Home and business routers, mesh systems and range extenders.",
        CatalogIcon::Wifi,
        "networking",
        &[
            "Dual-band and tri-band",
            "Mesh WiFi systems",
            "Business-grade options",
        ],
        "₹800 - ₹25,000",
        "in-stock",
        "1-2 Years (varies by brand)",
    );

    entries
}

pub fn brands() -> Vec<CatalogBrand> {
    let mut entries = Vec::new();
    let mut brand = |slug: &str, name: &str, category: &str, website: &str, featured: bool| {
        entries.push(CatalogBrand {
            slug: slug.into(),
            name: name.into(),
            category: category.into(),
            website: website.into(),
            featured,
            order: entries.len() as u32 + 1,
        });
    };

    brand("dell", "Dell", "Laptops & Desktops", "https://www.dell.com", true);
    brand("hp", "HP", "Laptops & Computers", "https://www.hp.com", true);
    brand("lenovo", "Lenovo", "Laptops & Desktops", "https://www.lenovo.com", true);
    brand("asus", "ASUS", "Laptops & Motherboards", "https://www.asus.com", true);
    brand("acer", "Acer", "Laptops & Computers", "https://www.acer.com", false);
    brand("intel", "Intel", "Processors", "https://www.intel.com", true);
    brand("amd", "AMD", "Processors & Graphics", "https://www.amd.com", true);
    brand("nvidia", "NVIDIA", "Graphics Cards", "https://www.nvidia.com", true);
    brand("msi", "MSI", "Motherboards & Gaming", "https://www.msi.com", false);
    brand("gigabyte", "Gigabyte", "Motherboards & Graphics", "https://www.gigabyte.com", false);
    brand("canon", "Canon", "Printers & Scanners", "https://www.canon.com", false);
    brand("epson", "Epson", "Printers & Scanners", "https://www.epson.com", false);
    brand("samsung", "Samsung", "Monitors & Displays", "https://www.samsung.com", false);
    brand("lg", "LG", "Monitors & Displays", "https://www.lg.com", false);
    brand("hikvision", "Hikvision", "CCTV & Surveillance", "https://www.hikvision.com", false);
    brand("cpplus", "CP Plus", "CCTV & Surveillance", "https://www.cpplusworld.com", false);
    brand("dlink", "D-Link", "Networking & WiFi", "https://www.dlink.com", false);
    brand("tplink", "TP-Link", "Networking & WiFi", "https://www.tp-link.com", false);
    brand("logitech", "Logitech", "Peripherals", "https://www.logitech.com", false);
    brand("western-digital", "Western Digital", "Storage Solutions", "https://www.westerndigital.com", false);

    entries
}

pub fn testimonials() -> Vec<CatalogTestimonial> {
    let mut entries = Vec::new();
    let mut testimonial =
        |name: &str, role: &str, company: &str, text: &str, initials: &str| {
            entries.push(CatalogTestimonial {
                name: name.into(),
                role: role.into(),
                company: company.into(),
                testimonial: text.into(),
                rating: 5,
                location: "Indore, MP".into(),
                initials: initials.into(),
            });
        };

    testimonial(
        "Rajesh Kumar",
        "Business Owner",
        "TechStart Solutions",
        "D P System helped us set up our entire office network. Their team is professional, knowledgeable, and always available for support. Highly recommended!",
        "RK",
    );
    testimonial(
        "Priya Sharma",
        "Freelance Designer",
        "Creative Studio",
        "I got my custom PC built for video editing from D P System. The performance is outstanding and they stayed within my budget. Great service!",
        "PS",
    );
    testimonial(
        "Amit Patel",
        "IT Manager",
        "Bright Future Pvt. Ltd.",
        "We've been using their AMC services for 2 years. Quick response time, genuine parts, and fair pricing. They truly understand business needs.",
        "AP",
    );
    testimonial(
        "Sneha Verma",
        "CA Firm Partner",
        "Verma & Associates",
        "They installed CCTV cameras across our office and configured mobile viewing for every partner. Clean work and patient after-sales support.",
        "SV",
    );
    testimonial(
        "Vikram Singh",
        "Shop Owner",
        "Singh Electronics",
        "Bought laptops and printers for my shop from them. Honest advice, fair prices, and they handle every service issue themselves.",
        "VS",
    );
    testimonial(
        "Anita Desai",
        "School Principal",
        "Modern Public School",
        "Our computer lab runs on machines supplied and maintained by D P System. Downtime is rare and help is one phone call away.",
        "AD",
    );

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(services().len(), 11);
        assert_eq!(products().len(), 10);
        assert_eq!(brands().len(), 20);
        assert_eq!(testimonials().len(), 6);
    }

    #[test]
    fn test_slugs_are_unique() {
        let slugs: HashSet<_> = services().into_iter().map(|s| s.slug).collect();
        assert_eq!(slugs.len(), 11);
        let slugs: HashSet<_> = products().into_iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), 10);
    }

    #[test]
    fn test_orders_are_sequential() {
        for (index, service) in services().iter().enumerate() {
            assert_eq!(service.order as usize, index + 1);
        }
    }

    #[test]
    fn test_every_service_has_highlights() {
        for service in services() {
            assert!(!service.highlights.is_empty(), "{} has no highlights", service.slug);
        }
    }
}
