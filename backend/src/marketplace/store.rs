use crate::error::{BhoomiError, BhoomiResult};
use crate::models::{Listing, ListingType};
use chrono::{DateTime, Utc};

/// Read side of the marketplace. The seed data implements it today; a real
/// listings backend can replace it without touching the handlers.
pub trait ListingSource: Send + Sync {
    fn all(&self) -> &[Listing];
}

pub struct SeedListings {
    listings: Vec<Listing>,
}

impl SeedListings {
    pub fn load() -> BhoomiResult<Self> {
        let listings = seed_rows().into_iter().collect::<BhoomiResult<Vec<_>>>()?;
        tracing::debug!("Loaded {} seed listings", listings.len());
        Ok(Self { listings })
    }
}

impl ListingSource for SeedListings {
    fn all(&self) -> &[Listing] {
        &self.listings
    }
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: &str,
    crop: &str,
    variety: &str,
    quantity: f64,
    price: f64,
    location: &str,
    description: &str,
    listing_type: ListingType,
    seller_name: &str,
    seller_phone: &str,
    created_at: &str,
    rating: f32,
) -> BhoomiResult<Listing> {
    let created_at = created_at.parse::<DateTime<Utc>>().map_err(|e| {
        BhoomiError::Internal(format!("Bad seed timestamp for listing {}: {}", id, e))
    })?;

    Ok(Listing {
        id: id.to_string(),
        crop: crop.to_string(),
        variety: variety.to_string(),
        quantity,
        price,
        location: location.to_string(),
        description: description.to_string(),
        listing_type,
        seller_name: seller_name.to_string(),
        seller_phone: seller_phone.to_string(),
        created_at,
        rating,
    })
}

fn seed_rows() -> Vec<BhoomiResult<Listing>> {
    vec![
        seed(
            "1",
            "Wheat",
            "HD-2967",
            100.0,
            2150.0,
            "Bareilly, Uttar Pradesh",
            "High quality wheat, freshly harvested. Moisture content 12%. Ready for immediate delivery.",
            ListingType::Sell,
            "Ramesh Kumar",
            "+91 9876543210",
            "2024-01-15T10:00:00Z",
            4.5,
        ),
        seed(
            "2",
            "Wheat",
            "PBW-343",
            250.0,
            2200.0,
            "Ludhiana, Punjab",
            "Premium wheat variety with excellent grain quality. Stored in proper conditions.",
            ListingType::Sell,
            "Gurpreet Singh",
            "+91 9876543211",
            "2024-01-14T15:30:00Z",
            4.8,
        ),
        seed(
            "3",
            "Wheat",
            "DBW-88",
            150.0,
            2100.0,
            "Karnal, Haryana",
            "Disease-resistant wheat variety. Excellent for flour production.",
            ListingType::Sell,
            "Suresh Sharma",
            "+91 9876543212",
            "2024-01-13T09:15:00Z",
            4.2,
        ),
        seed(
            "4",
            "Rice",
            "Basmati 1121",
            80.0,
            4500.0,
            "Dehradun, Uttarakhand",
            "Premium basmati rice with long grains and excellent aroma. Export quality.",
            ListingType::Sell,
            "Mohan Lal",
            "+91 9876543213",
            "2024-01-12T14:20:00Z",
            4.9,
        ),
        seed(
            "5",
            "Rice",
            "IR-64",
            200.0,
            1850.0,
            "Cuttack, Odisha",
            "High-yielding rice variety. Good for daily consumption. Bulk quantity available.",
            ListingType::Sell,
            "Ravi Patel",
            "+91 9876543214",
            "2024-01-11T11:45:00Z",
            4.3,
        ),
        seed(
            "6",
            "Rice",
            "Sona Masuri",
            120.0,
            2200.0,
            "Guntur, Andhra Pradesh",
            "Premium quality Sona Masuri rice. Light weight and aromatic.",
            ListingType::Sell,
            "Venkat Reddy",
            "+91 9876543215",
            "2024-01-10T16:30:00Z",
            4.6,
        ),
        seed(
            "7",
            "Corn",
            "Sweet Corn",
            50.0,
            1200.0,
            "Nashik, Maharashtra",
            "Fresh sweet corn, perfect for processing. Harvested yesterday.",
            ListingType::Sell,
            "Prakash Jadhav",
            "+91 9876543216",
            "2024-01-09T08:00:00Z",
            4.4,
        ),
        seed(
            "8",
            "Corn",
            "Dent Corn",
            300.0,
            1100.0,
            "Indore, Madhya Pradesh",
            "High-quality dent corn suitable for animal feed and industrial use.",
            ListingType::Sell,
            "Rajesh Patidar",
            "+91 9876543217",
            "2024-01-08T13:15:00Z",
            4.1,
        ),
        seed(
            "9",
            "Sugarcane",
            "Co-86032",
            500.0,
            350.0,
            "Muzaffarnagar, Uttar Pradesh",
            "High sucrose content sugarcane. Ready for crushing. Direct from field.",
            ListingType::Sell,
            "Mahesh Tyagi",
            "+91 9876543218",
            "2024-01-07T10:30:00Z",
            4.7,
        ),
        seed(
            "10",
            "Sugarcane",
            "CoM-265",
            800.0,
            320.0,
            "Kolhapur, Maharashtra",
            "Disease-resistant sugarcane variety with good yield. Bulk quantity available.",
            ListingType::Sell,
            "Santosh Patil",
            "+91 9876543219",
            "2024-01-06T12:45:00Z",
            4.5,
        ),
        seed(
            "11",
            "Cotton",
            "Bt Cotton",
            40.0,
            5800.0,
            "Nagpur, Maharashtra",
            "Premium Bt cotton with excellent fiber quality. Ginned and ready for sale.",
            ListingType::Sell,
            "Anil Deshmukh",
            "+91 9876543220",
            "2024-01-05T14:00:00Z",
            4.8,
        ),
        seed(
            "12",
            "Cotton",
            "Desi Cotton",
            60.0,
            5200.0,
            "Rajkot, Gujarat",
            "Traditional desi cotton variety. Good staple length and strength.",
            ListingType::Sell,
            "Kiran Patel",
            "+91 9876543221",
            "2024-01-04T09:30:00Z",
            4.3,
        ),
        seed(
            "13",
            "Soybean",
            "JS-335",
            180.0,
            4200.0,
            "Bhopal, Madhya Pradesh",
            "High protein content soybean. Excellent for oil extraction and animal feed.",
            ListingType::Sell,
            "Dinesh Chouhan",
            "+91 9876543222",
            "2024-01-03T11:20:00Z",
            4.6,
        ),
        seed(
            "14",
            "Soybean",
            "MACS-1407",
            220.0,
            4100.0,
            "Latur, Maharashtra",
            "Disease-resistant soybean variety with good oil content.",
            ListingType::Sell,
            "Balasaheb Shinde",
            "+91 9876543223",
            "2024-01-02T15:45:00Z",
            4.4,
        ),
        seed(
            "15",
            "Mustard",
            "Pusa Bold",
            90.0,
            5500.0,
            "Bharatpur, Rajasthan",
            "High oil content mustard seeds. Perfect for oil extraction.",
            ListingType::Sell,
            "Gopal Sharma",
            "+91 9876543224",
            "2024-01-01T08:15:00Z",
            4.7,
        ),
        seed(
            "16",
            "Groundnut",
            "TAG-24",
            70.0,
            4800.0,
            "Junagadh, Gujarat",
            "Premium groundnut with high oil content. Bold size kernels.",
            ListingType::Sell,
            "Jayesh Patel",
            "+91 9876543225",
            "2023-12-31T13:30:00Z",
            4.5,
        ),
        seed(
            "17",
            "Onion",
            "Nashik Red",
            150.0,
            2200.0,
            "Nashik, Maharashtra",
            "Fresh red onions with good storage life. Direct from farm.",
            ListingType::Sell,
            "Sunil Jadhav",
            "+91 9876543226",
            "2023-12-30T10:00:00Z",
            4.2,
        ),
        seed(
            "18",
            "Onion",
            "Bangalore Rose",
            200.0,
            1800.0,
            "Bangalore, Karnataka",
            "Light red onions with mild flavor. Good for export.",
            ListingType::Sell,
            "Ravi Kumar",
            "+91 9876543227",
            "2023-12-29T14:45:00Z",
            4.6,
        ),
        seed(
            "19",
            "Potato",
            "Kufri Jyoti",
            300.0,
            1200.0,
            "Agra, Uttar Pradesh",
            "Fresh potatoes with good size and quality. Cold storage available.",
            ListingType::Sell,
            "Mukesh Agarwal",
            "+91 9876543228",
            "2023-12-28T09:20:00Z",
            4.3,
        ),
        seed(
            "20",
            "Potato",
            "Kufri Chipsona",
            250.0,
            1400.0,
            "Hooghly, West Bengal",
            "Processing grade potatoes perfect for chips and fries.",
            ListingType::Sell,
            "Subhash Das",
            "+91 9876543229",
            "2023-12-27T16:10:00Z",
            4.8,
        ),
        seed(
            "21",
            "Tomato",
            "Pusa Ruby",
            80.0,
            2500.0,
            "Pune, Maharashtra",
            "Fresh red tomatoes with good shelf life. Perfect for processing.",
            ListingType::Sell,
            "Ganesh Kulkarni",
            "+91 9876543230",
            "2023-12-26T11:30:00Z",
            4.4,
        ),
        seed(
            "22",
            "Wheat",
            "Any variety",
            500.0,
            2000.0,
            "Delhi, Delhi",
            "Looking to buy wheat in bulk for flour mill. Good rates offered.",
            ListingType::Buy,
            "Amit Gupta",
            "+91 9876543231",
            "2023-12-25T12:00:00Z",
            4.1,
        ),
        seed(
            "23",
            "Rice",
            "Basmati",
            200.0,
            4000.0,
            "Mumbai, Maharashtra",
            "Urgent requirement for basmati rice. Immediate payment guaranteed.",
            ListingType::Buy,
            "Rohit Shah",
            "+91 9876543232",
            "2023-12-24T15:20:00Z",
            4.7,
        ),
        seed(
            "24",
            "Corn",
            "Feed grade",
            1000.0,
            1000.0,
            "Hyderabad, Telangana",
            "Need corn for poultry feed. Regular monthly requirement.",
            ListingType::Buy,
            "Srinivas Rao",
            "+91 9876543233",
            "2023-12-23T08:45:00Z",
            4.5,
        ),
        seed(
            "25",
            "Cotton",
            "Any variety",
            100.0,
            5500.0,
            "Coimbatore, Tamil Nadu",
            "Cotton required for textile mill. Quality parameters negotiable.",
            ListingType::Buy,
            "Murugan Textiles",
            "+91 9876543234",
            "2023-12-22T13:15:00Z",
            4.6,
        ),
        seed(
            "26",
            "Turmeric",
            "Salem Turmeric",
            30.0,
            8500.0,
            "Salem, Tamil Nadu",
            "Premium quality turmeric with high curcumin content. Export grade.",
            ListingType::Sell,
            "Selvam Raman",
            "+91 9876543235",
            "2023-12-21T10:30:00Z",
            4.9,
        ),
        seed(
            "27",
            "Chili",
            "Guntur Sannam",
            25.0,
            12000.0,
            "Guntur, Andhra Pradesh",
            "Spicy red chilies with high capsaicin content. Sun-dried and ready.",
            ListingType::Sell,
            "Krishna Reddy",
            "+91 9876543236",
            "2023-12-20T14:00:00Z",
            4.8,
        ),
        seed(
            "28",
            "Cardamom",
            "Malabar",
            5.0,
            150000.0,
            "Idukki, Kerala",
            "Premium cardamom with strong aroma. Hand-picked and processed.",
            ListingType::Sell,
            "Thomas Joseph",
            "+91 9876543237",
            "2023-12-19T09:45:00Z",
            4.7,
        ),
        seed(
            "29",
            "Black Pepper",
            "Malabar Pepper",
            10.0,
            45000.0,
            "Wayanad, Kerala",
            "Organic black pepper with high piperine content. Export quality.",
            ListingType::Sell,
            "Ravi Menon",
            "+91 9876543238",
            "2023-12-18T11:20:00Z",
            4.6,
        ),
        seed(
            "30",
            "Coconut",
            "Tall Variety",
            2000.0,
            25.0,
            "Coimbatore, Tamil Nadu",
            "Fresh coconuts with good water content. Direct from farm.",
            ListingType::Sell,
            "Palani Swamy",
            "+91 9876543239",
            "2023-12-17T16:30:00Z",
            4.3,
        ),
    ]
}
