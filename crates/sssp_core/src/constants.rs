/// Edge weight and distance type
pub type Weight = f64;
