use noble_types::Product;

/// Supplies the product list served when the content source is unavailable.
pub trait DefaultProducts: Send + Sync {
    fn products(&self) -> Vec<Product>;
}

impl DefaultProducts for Vec<Product> {
    fn products(&self) -> Vec<Product> {
        self.clone()
    }
}

/// Catalog shipped with the site.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProducts;

impl DefaultProducts for BuiltinProducts {
    fn products(&self) -> Vec<Product> {
        BUILTIN_CATALOG
            .iter()
            .map(|(id, name, end_product, cas, category, slug)| {
                Product::catalog_entry(*id, *name, *end_product, *cas, *category, *slug)
            })
            .collect()
    }
}

type CatalogRow = (
    u64,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

// id, name, end product, CAS number, category, slug
static BUILTIN_CATALOG: [CatalogRow; 52] = [
    (1, "3-Acetyl Pyridine", "Imatinib & Nilotinib", "350-03-8", "Intermediate", "3-acetyl-pyridine"),
    (2, "Methyl Nicotinate", "Imatinib", "93-60-7", "Intermediate", "methyl-nicotinate"),
    (3, "2-Chloro-6-methoxy-pyridine", "Various APIs", "55305-95-8", "Intermediate", "2-chloro-6-methoxy-pyridine"),
    (7, "4-Aminopyridine", "Pharmaceutical intermediates", "504-64-5", "Intermediate", "4-aminopyridine"),
    (8, "2-Aminopyridine", "Drug synthesis", "504-64-5", "Intermediate", "2-aminopyridine"),
    (11, "3-Hydroxy Pyridine", "Vitamin B6 synthesis", "581-31-1", "Intermediate", "3-hydroxy-pyridine"),
    (12, "4-Chloropyrimidine", "Antiviral drugs", "497-23-4", "Intermediate", "4-chloropyrimidine"),
    (13, "2-Methylpyridine", "Pharmaceutical synthesis", "109-06-8", "Intermediate", "2-methylpyridine"),
    (14, "4-Methylpyridine", "Drug intermediates", "108-89-4", "Intermediate", "4-methylpyridine"),
    (15, "3-Bromopyridine", "Pharmaceutical intermediates", "626-55-1", "Intermediate", "3-bromopyridine"),
    (16, "2,6-Dimethylpyridine", "Drug synthesis", "108-97-6", "Intermediate", "2-6-dimethylpyridine"),
    (17, "4-Formylpyridine", "Pharmaceutical intermediates", "872-85-3", "Intermediate", "4-formylpyridine"),
    (18, "2-Cyanopyridine", "Drug synthesis", "100-70-9", "Intermediate", "2-cyanopyridine"),
    (19, "3-Cyanopyridine", "Pharmaceutical intermediates", "100-61-2", "Intermediate", "3-cyanopyridine"),
    (20, "4-Pyridylcarboxaldehyde", "Drug synthesis", "872-85-3", "Intermediate", "4-pyridylcarboxaldehyde"),
    (21, "2-Aminomethylpyridine", "Pharmaceutical intermediates", "3731-51-9", "Intermediate", "2-aminomethylpyridine"),
    (22, "4-Aminomethylpyridine", "Drug synthesis", "3731-52-0", "Intermediate", "4-aminomethylpyridine"),
    (23, "2,4-Dimethylpyridine", "Pharmaceutical intermediates", "108-99-6", "Intermediate", "2-4-dimethylpyridine"),
    (24, "3,5-Dimethylpyridine", "Drug synthesis", "591-22-0", "Intermediate", "3-5-dimethylpyridine"),
    (25, "2-Ethylpyridine", "Pharmaceutical intermediates", "104-90-5", "Intermediate", "2-ethylpyridine"),
    (26, "4-Ethylpyridine", "Drug synthesis", "536-75-4", "Intermediate", "4-ethylpyridine"),
    (27, "2-Phenylpyridine", "Pharmaceutical intermediates", "1008-88-5", "Intermediate", "2-phenylpyridine"),
    (28, "4-Phenylpyridine", "Drug synthesis", "947-61-9", "Intermediate", "4-phenylpyridine"),
    (29, "2,3-Dichloropyridine", "Pharmaceutical intermediates", "2402-79-1", "Intermediate", "2-3-dichloropyridine"),
    (30, "3,4-Dichloropyridine", "Drug synthesis", "2457-50-5", "Intermediate", "3-4-dichloropyridine"),
    (31, "Acetone", "Solvent for various processes", "67-64-1", "Solvent", "acetone"),
    (32, "Methanol", "Industrial solvent", "67-56-1", "Solvent", "methanol"),
    (33, "Ethanol", "Pharmaceutical grade solvent", "64-17-5", "Solvent", "ethanol"),
    (34, "Isopropanol", "Pharmaceutical solvent", "67-63-0", "Solvent", "isopropanol"),
    (35, "Butanol", "Industrial solvent", "71-36-3", "Solvent", "butanol"),
    (36, "Hexane", "Extraction solvent", "110-54-3", "Solvent", "hexane"),
    (37, "Heptane", "Pharmaceutical solvent", "142-82-5", "Solvent", "heptane"),
    (38, "Toluene", "Industrial solvent", "108-88-3", "Solvent", "toluene"),
    (39, "Xylene", "Pharmaceutical solvent", "1330-20-7", "Solvent", "xylene"),
    (40, "Dichloromethane", "Extraction solvent", "75-09-2", "Solvent", "dichloromethane"),
    (41, "Chloroform", "Laboratory solvent", "67-66-3", "Solvent", "chloroform"),
    (42, "Carbon Tetrachloride", "Industrial solvent", "56-23-5", "Solvent", "carbon-tetrachloride"),
    (43, "Ethyl Acetate", "Pharmaceutical solvent", "141-78-6", "Solvent", "ethyl-acetate"),
    (44, "Methyl Ethyl Ketone", "Industrial solvent", "78-93-3", "Solvent", "methyl-ethyl-ketone"),
    (45, "Acetonitrile", "Pharmaceutical solvent", "75-05-8", "Solvent", "acetonitrile"),
    (56, "N butyl Acetate", "Pharmaceutical / industrial solvent", "123-86-4", "Solvent", "n-butyl-acetate"),
    (57, "N propyl Acetate", "Pharmaceutical / industrial solvent", "109-60-4", "Solvent", "n-propyl-acetate"),
    (46, "Paracetamol", "Analgesic and antipyretic", "103-90-2", "API", "paracetamol"),
    (47, "Ibuprofen", "Nonsteroidal anti-inflammatory drug", "15687-27-1", "API", "ibuprofen"),
    (48, "Aspirin", "Analgesic and anti-inflammatory", "50-78-2", "API", "aspirin"),
    (49, "Amoxicillin", "Antibiotic", "26787-78-0", "API", "amoxicillin"),
    (50, "Ciprofloxacin", "Antibiotic", "85721-33-1", "API", "ciprofloxacin"),
    (51, "Metformin", "Antidiabetic drug", "657-24-9", "API", "metformin"),
    (52, "Omeprazole", "Proton pump inhibitor", "73590-58-6", "API", "omeprazole"),
    (53, "Atorvastatin", "Cholesterol-lowering drug", "134523-00-5", "API", "atorvastatin"),
    (54, "Lisinopril", "ACE inhibitor", "83915-83-7", "API", "lisinopril"),
    (55, "Simvastatin", "Cholesterol-lowering drug", "79902-63-9", "API", "simvastatin"),
];
