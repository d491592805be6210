// ============================================================
// Layer 4 — Inanimate Object Pool
// ============================================================
// The fixed pool of replacement labels for substitution mode.
// Each label names an inanimate object suitable for pretend
// play, phrased so it can stand in for a character name in a
// sentence ("Teddy bear with blue hat entered the kitchen.").
//
// Selection is a plain uniform draw from the pool. The caller
// owns the RNG — the pool itself is stateless, which keeps every
// draw attributable to the run's single seeded generator.

use rand::Rng;

/// Candidate replacement labels, uniform draw.
const OBJECT_LABELS: &[&str] = &[
    "Teddy bear with blue hat",
    "Doll with pink dress",
    "Stuffed bunny with bow",
    "Toy robot with painted face",
    "Wooden puppet with strings",
    "Rag doll with button eyes",
    "Plush cat with whiskers",
    "Baby doll with bonnet",
    "Toy soldier with helmet",
    "Stuffed elephant with trunk",
    "Marionette with smile",
    "Sock puppet with yarn hair",
    "Toy horse with mane",
    "Plush dog with collar",
    "Stuffed owl with wings",
    "Toy dinosaur with spots",
    "Rag bunny with floppy ears",
    "Doll with curly hair",
    "Teddy with red scarf",
    "Puppet with big nose",
    "Plush bear with vest",
    "Toy mouse with whiskers",
    "Stuffed pig with tail",
    "Doll with freckles",
    "Toy monkey with banana",
    "Plush sheep with wool",
    "Stuffed duck with hat",
    "Toy cow with bell",
    "Rag cat with stripes",
    "Doll with pigtails",
];

/// Draw one label uniformly at random from the pool.
pub fn random_object_label(rng: &mut impl Rng) -> &'static str {
    OBJECT_LABELS[rng.gen_range(0..OBJECT_LABELS.len())]
}
