//! Named hues, evenly spaced around the color wheel starting at red.
//!
//! Names follow https://color.fandom.com/wiki/List_of_hues.

/// All hue names in wheel order; hue `i` sits at `i / HUE_NAMES.len()` of a turn.
pub const HUE_NAMES: [&str; 96] = [
    "Red",
    "Prysa",
    "Zarqa",
    "Pengwin",
    "Vermilion",
    "Colyw",
    "Haha",
    "Gabby",
    "Orange",
    "Winter",
    "Sharasha",
    "Buzz",
    "Amber",
    "Builder",
    "Lekko",
    "Villager",
    "Yellow",
    "Yolett",
    "Lemon",
    "Burton",
    "Lime",
    "Sprite",
    "Jay",
    "Robin",
    "Chartreuse",
    "Misho",
    "Ggahhal",
    "Evbo",
    "Ddahal",
    "Swimsuit",
    "Medu",
    "Pearlike",
    "Green",
    "Lively",
    "Cypher",
    "Veh",
    "Erin",
    "Erus",
    "Jus",
    "Emeraldstar",
    "Spring",
    "Gold",
    "Mool",
    "Diamond",
    "Gashyanta",
    "Yreli",
    "Uroz",
    "Bobi",
    "Cyan",
    "Feil",
    "Zinor",
    "Twits",
    "Capri",
    "Iapion",
    "Uzor",
    "Underwater",
    "Azure",
    "Wet",
    "Zinoret",
    "Harza",
    "Cerulean",
    "Doto",
    "Zarqaret",
    "Gloomy",
    "Blue",
    "Rarity",
    "Linel",
    "Fluttershy",
    "Volta",
    "Over",
    "Kyryn",
    "Smot",
    "Violet",
    "Twilight",
    "Zinur",
    "Chwarae",
    "Llew",
    "Howl",
    "Kyrene",
    "Skelato",
    "Magenta",
    "Kirpan",
    "Hung",
    "Minkraf",
    "Cerise",
    "Wooder",
    "Loo",
    "Jerin",
    "Rose",
    "Hesonbwon",
    "Jerry",
    "Fasha",
    "Crimson",
    "Rara",
    "Khwarezmian",
    "Tata",
];
