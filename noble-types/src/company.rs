use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub city: &'static str,
    pub country: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyInfo {
    pub name: &'static str,
    pub established: &'static str,
    pub owner: &'static str,
    pub owner_qualification: &'static str,
    pub experience: &'static str,
    pub description: &'static str,
    pub full_description: &'static str,
    pub facility_description: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub location: Location,
    pub products_count: &'static str,
}

impl CompanyInfo {
    pub fn phone_href(&self) -> String {
        format!(
            "tel:{}",
            self.phone.chars().filter(|c| !c.is_whitespace()).collect::<String>()
        )
    }

    pub fn map_href(&self) -> String {
        format!(
            "https://www.google.com/maps?q={},{}",
            self.location.lat, self.location.lng
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub static COMPANY: CompanyInfo = CompanyInfo {
    name: "M/s Noble Life Sciences",
    established: "2015",
    owner: "Mr. P. Vinod Kumar",
    owner_qualification: "M.Tech",
    experience: "13 years in supply chain management",
    description: "Leading manufacturer of Intermediates for APIs and trader of Chemicals & Solvents",
    full_description: "Founded in 2015 by Mr. Vinod Kumar Reddy Pavuluri (M.Tech), Noble Life Sciences has \
        established itself as a trusted name in the pharmaceutical chemical industry. Leveraging his 13 years \
        of experience in supply chain management, we specialize in manufacturing high-quality intermediates \
        for APIs and trading premium chemicals and solvents.",
    facility_description: "Our state-of-the-art facility in Hyderabad, India, is equipped with modern \
        technology and staffed by experienced professionals dedicated to maintaining the highest standards \
        of quality and safety.",
    address: "Plot No.260, S.V Cooperative Society, IDA-Jeedimetla, Hyderabad-500055, Telangana-India",
    phone: "+91 99129 24272",
    email: "info@noblels.com",
    location: Location {
        lat: 17.5449,
        lng: 78.4889,
        city: "Hyderabad",
        country: "India",
    },
    products_count: "50+",
};

pub static WHY_CHOOSE_US: [Feature; 4] = [
    Feature {
        title: "Experience",
        description: "Serving the pharmaceutical industry since 2015 with expertise and reliability",
    },
    Feature {
        title: "Quality",
        description: "Stringent quality control measures ensuring international standards",
    },
    Feature {
        title: "Delivery",
        description: "Timely and efficient delivery network across India and international markets",
    },
    Feature {
        title: "Trust",
        description: "Building long-term relationships through transparency and integrity",
    },
];
