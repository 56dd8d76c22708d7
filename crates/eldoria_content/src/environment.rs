//! The nine environments and their cell layouts.
//!
//! Layouts are written row by row, so `layout()[y][x]` is the cell at
//! column `x`, row `y`.

use std::fmt;

use eldoria_world::GRID_SIZE;

/// Name and description of one cell.
pub type Cell = (&'static str, &'static str);

/// A full grid of cells.
pub type Layout = [[Cell; GRID_SIZE]; GRID_SIZE];

/// The regions of Eldoria, in build order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Starting village.
    Village,
    /// Home of Gorwin and his riddle.
    Woods,
    /// Thorin's caves of light.
    Caves,
    /// Lyra's library.
    Library,
    /// Windswept peaks.
    Mountains,
    /// Illusions and fog.
    Marshes,
    /// Mira's temple.
    Sanctum,
    /// The final confrontation.
    Lair,
    /// A secret place, unreachable for now.
    Grove,
}

impl Environment {
    /// Every environment, in build order.
    pub const ALL: [Self; 9] = [
        Self::Village,
        Self::Woods,
        Self::Caves,
        Self::Library,
        Self::Mountains,
        Self::Marshes,
        Self::Sanctum,
        Self::Lair,
        Self::Grove,
    ];

    /// Display name; also the grid name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Village => "Village of Luminara",
            Self::Woods => "Whispering Woods",
            Self::Caves => "Crystal Caves",
            Self::Library => "Forgotten Library",
            Self::Mountains => "Echoing Mountains",
            Self::Marshes => "Shadow Marshes",
            Self::Sanctum => "Sanctum of Light",
            Self::Lair => "Malakar's Lair",
            Self::Grove => "Hidden Grove",
        }
    }

    /// Looks an environment up by display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|env| env.name() == name)
    }

    /// Position in build order, which is also the grid id.
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|env| *env == self).unwrap_or_default()
    }

    /// Cell names and descriptions.
    #[must_use]
    pub fn layout(self) -> &'static Layout {
        match self {
            Self::Village => &VILLAGE,
            Self::Woods => &WOODS,
            Self::Caves => &CAVES,
            Self::Library => &LIBRARY,
            Self::Mountains => &MOUNTAINS,
            Self::Marshes => &MARSHES,
            Self::Sanctum => &SANCTUM,
            Self::Lair => &LAIR,
            Self::Grove => &GROVE,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const VILLAGE: Layout = [
    [
        ("Northern Gate", "A sturdy wooden gate marks the northern entrance to the village."),
        ("Village Square", "The heart of Luminara, where villagers gather around a stone fountain."),
        ("Eastern Market", "Stalls with colorful awnings display various goods and wares."),
    ],
    [
        ("Craftsman's Workshop", "The sound of hammering and smell of wood fills this busy workshop."),
        ("Elder's House", "A modest but well-kept house where Elder Elda resides."),
        ("Herbalist's Garden", "A peaceful garden filled with medicinal plants and herbs."),
    ],
    [
        ("Western Farm", "Fields of wheat sway gently in the breeze."),
        ("Southern Road", "A well-traveled dirt road leading south from the village."),
        ("Village Shrine", "A small shrine dedicated to the ancient protectors of Eldoria."),
    ],
];

const WOODS: Layout = [
    [
        ("Ancient Grove", "Massive trees tower overhead, their branches forming a natural archway."),
        ("Hidden Path", "A narrow trail winds between the ancient trees."),
        ("Mystic Clearing", "Moonlight filters through the leaves, illuminating a peaceful clearing."),
    ],
    [
        ("Twisted Path", "The path here winds confusingly between gnarled trees."),
        ("Hermit's Hollow", "A small clearing where Gorwin the hermit makes his home."),
        ("Whispering Glade", "The leaves here seem to whisper ancient secrets."),
    ],
    [
        ("Shadowed Vale", "Deep shadows gather between the ancient trees."),
        ("Forest Heart", "The very heart of the Whispering Woods, where magic runs deep."),
        ("Eastern Trail", "A trail leading eastward through the dense forest."),
    ],
];

const CAVES: Layout = [
    [
        ("Cave Entrance", "Crystalline formations frame the entrance to the caves."),
        ("Crystal Chamber", "The walls are lined with glowing crystals of various colors."),
        ("Reflection Hall", "Light bounces between countless crystal surfaces here."),
    ],
    [
        ("Mineral Pool", "A still pool reflects the crystalline ceiling above."),
        ("Central Cavern", "A vast chamber where all paths converge."),
        ("Crystal Garden", "Crystal formations grow like flowers from the cave floor."),
    ],
    [
        ("Dark Tunnel", "A passage where even the crystals' light seems dim."),
        ("Light Chamber", "Beams of light dance through strategically placed crystals."),
        ("Eastern Passage", "A tunnel leading deeper into the mountain."),
    ],
];

const LIBRARY: Layout = [
    [
        ("Ancient Archives", "Towering shelves filled with ancient tomes and scrolls."),
        ("Reading Hall", "A grand hall with reading tables and magical floating lights."),
        ("Restricted Section", "A roped-off area containing rare and powerful books."),
    ],
    [
        ("West Wing", "A quiet section with comfortable reading nooks."),
        ("Central Chamber", "The heart of the library, where the Book Sorting Puzzle awaits."),
        ("East Wing", "Shelves containing historical records and maps."),
    ],
    [
        ("Scholar's Corner", "A cozy area where scholars gather to discuss their findings."),
        ("Library Entrance", "The grand entrance to the Forgotten Library."),
        ("Curator's Office", "A well-organized office filled with catalogues and notes."),
    ],
];

const MOUNTAINS: Layout = [
    [
        ("Rocky Outcrop", "A windswept ledge overlooking distant peaks."),
        ("Mountain Peak", "The highest point, where the wind carries strange echoes."),
        ("Crystal View", "A ledge offering a view of crystalline formations below."),
    ],
    [
        ("Echo Chamber", "A natural cave where sounds reflect in mysterious ways."),
        ("Resonance Chamber", "The heart of the Echo Puzzle, where sounds converge."),
        ("Wind Tunnel", "A natural passage where the wind creates musical notes."),
    ],
    [
        ("Mountain Path", "A treacherous path winding through the mountains."),
        ("Base Camp", "A relatively safe area to rest and prepare."),
        ("Eastern Trail", "A path leading down towards the Shadow Marshes."),
    ],
];

const MARSHES: Layout = [
    [
        ("Misty Shore", "A foggy shoreline where shadows dance on the water."),
        ("Shadow Pool", "A dark pool reflecting distorted images."),
        ("Twisted Grove", "A grove of trees bent into unnatural shapes."),
    ],
    [
        ("Illusion Path", "A path that seems to shift and change."),
        ("Heart of Shadows", "The center of the marshes where reality seems most unstable."),
        ("Phantom Clearing", "A clearing where ghostly shapes flit between trees."),
    ],
    [
        ("Western Edge", "The border between the marshes and firmer ground."),
        ("Sunken Path", "A partially flooded trail through the marsh."),
        ("Eastern Gateway", "A path leading toward the Sanctum of Light."),
    ],
];

const SANCTUM: Layout = [
    [
        ("Western Courtyard", "An open courtyard bathed in golden light."),
        ("Grand Entrance", "Massive doors marked with symbols of light."),
        ("Eastern Courtyard", "A peaceful garden with light-catching crystals."),
    ],
    [
        ("Hall of Trials", "A chamber where wisdom is tested."),
        ("Central Sanctum", "The sacred heart of the Sanctum where Mira resides."),
        ("Meditation Chamber", "A quiet room for contemplation and preparation."),
    ],
    [
        ("Ancient Archives", "Records of the Sanctum's history and prophecies."),
        ("Path to Malakar", "A heavily guarded passage leading to Malakar's domain."),
        ("Artifact Chamber", "A secure room housing powerful relics."),
    ],
];

const LAIR: Layout = [
    [
        ("Dark Antechamber", "A foreboding entrance hall shrouded in darkness."),
        ("Corrupted Hall", "A once-grand hall now tainted by dark energy."),
        ("Shadow Throne", "An imposing throne room radiating dark power."),
    ],
    [
        ("Torture Chamber", "A grim chamber filled with evil implements."),
        ("Central Chamber", "The heart of Malakar's power."),
        ("Ritual Room", "A chamber where dark rituals are performed."),
    ],
    [
        ("Prison Cells", "Dark cells holding Malakar's prisoners."),
        ("Guard Room", "A chamber where Malakar's minions gather."),
        ("Exit Portal", "A mysterious portal pulsing with energy."),
    ],
];

const GROVE: Layout = [
    [
        ("Ancient Tree", "A massive tree radiating ancient magic."),
        ("Sacred Pool", "A pool of crystal-clear water with healing properties."),
        ("Mystic Circle", "A circle of standing stones humming with power."),
    ],
    [
        ("Meditation Spot", "A peaceful clearing perfect for contemplation."),
        ("Grove Heart", "The magical center of the Hidden Grove."),
        ("Fairy Ring", "A ring of mushrooms where magical creatures gather."),
    ],
    [
        ("Overgrown Path", "A barely visible path leading to the grove."),
        ("Flower Garden", "A garden of magical flowering plants."),
        ("Crystal Cave", "A small cave filled with glowing crystals."),
    ],
];
