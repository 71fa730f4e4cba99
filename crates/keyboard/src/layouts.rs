//! Key position tables.
//!
//! Each table lists, for one ordered layout pair, the character typed under
//! the first layout and the character the same physical key produces under
//! the second. Keys that produce the same character in both layouts are not
//! listed. Reverse directions are written out as separate tables.

/// QWERTY → Ukrainian ЙЦУКЕН
pub const ENG_TO_UKR: &[(char, char)] = &[
    // Top row lowercase: `qwertyuiop[]\ → 'йцукенгшщзхїґ
    ('`', '\''),
    ('q', 'й'),
    ('w', 'ц'),
    ('e', 'у'),
    ('r', 'к'),
    ('t', 'е'),
    ('y', 'н'),
    ('u', 'г'),
    ('i', 'ш'),
    ('o', 'щ'),
    ('p', 'з'),
    ('[', 'х'),
    (']', 'ї'),
    ('\\', 'ґ'),
    // Top row uppercase: QWERTYUIOP{}| → ЙЦУКЕНГШЩЗХЇҐ
    ('Q', 'Й'),
    ('W', 'Ц'),
    ('E', 'У'),
    ('R', 'К'),
    ('T', 'Е'),
    ('Y', 'Н'),
    ('U', 'Г'),
    ('I', 'Ш'),
    ('O', 'Щ'),
    ('P', 'З'),
    ('{', 'Х'),
    ('}', 'Ї'),
    ('|', 'Ґ'),
    // Middle row lowercase: asdfghjkl;' → фівапролджє
    ('a', 'ф'),
    ('s', 'і'),
    ('d', 'в'),
    ('f', 'а'),
    ('g', 'п'),
    ('h', 'р'),
    ('j', 'о'),
    ('k', 'л'),
    ('l', 'д'),
    (';', 'ж'),
    ('\'', 'є'),
    // Middle row uppercase: ASDFGHJKL:" → ФІВАПРОЛДЖЄ
    ('A', 'Ф'),
    ('S', 'І'),
    ('D', 'В'),
    ('F', 'А'),
    ('G', 'П'),
    ('H', 'Р'),
    ('J', 'О'),
    ('K', 'Л'),
    ('L', 'Д'),
    (':', 'Ж'),
    ('"', 'Є'),
    // Bottom row lowercase: zxcvbnm,./ → ячсмитьбю.
    ('z', 'я'),
    ('x', 'ч'),
    ('c', 'с'),
    ('v', 'м'),
    ('b', 'и'),
    ('n', 'т'),
    ('m', 'ь'),
    (',', 'б'),
    ('.', 'ю'),
    ('/', '.'),
    // Bottom row uppercase: ZXCVBNM<>? → ЯЧСМИТЬБЮ,
    ('Z', 'Я'),
    ('X', 'Ч'),
    ('C', 'С'),
    ('V', 'М'),
    ('B', 'И'),
    ('N', 'Т'),
    ('M', 'Ь'),
    ('<', 'Б'),
    ('>', 'Ю'),
    ('?', ','),
    // Shifted digits: @#$^& → "№;:?
    ('@', '"'),
    ('#', '№'),
    ('$', ';'),
    ('^', ':'),
    ('&', '?'),
];

/// Ukrainian ЙЦУКЕН → QWERTY
pub const UKR_TO_ENG: &[(char, char)] = &[
    // Top row lowercase: 'йцукенгшщзхїґ → `qwertyuiop[]\
    ('\'', '`'),
    ('й', 'q'),
    ('ц', 'w'),
    ('у', 'e'),
    ('к', 'r'),
    ('е', 't'),
    ('н', 'y'),
    ('г', 'u'),
    ('ш', 'i'),
    ('щ', 'o'),
    ('з', 'p'),
    ('х', '['),
    ('ї', ']'),
    ('ґ', '\\'),
    // Top row uppercase: ЙЦУКЕНГШЩЗХЇҐ → QWERTYUIOP{}|
    ('Й', 'Q'),
    ('Ц', 'W'),
    ('У', 'E'),
    ('К', 'R'),
    ('Е', 'T'),
    ('Н', 'Y'),
    ('Г', 'U'),
    ('Ш', 'I'),
    ('Щ', 'O'),
    ('З', 'P'),
    ('Х', '{'),
    ('Ї', '}'),
    ('Ґ', '|'),
    // Middle row lowercase: фівапролджє → asdfghjkl;'
    ('ф', 'a'),
    ('і', 's'),
    ('в', 'd'),
    ('а', 'f'),
    ('п', 'g'),
    ('р', 'h'),
    ('о', 'j'),
    ('л', 'k'),
    ('д', 'l'),
    ('ж', ';'),
    ('є', '\''),
    // Middle row uppercase: ФІВАПРОЛДЖЄ → ASDFGHJKL:"
    ('Ф', 'A'),
    ('І', 'S'),
    ('В', 'D'),
    ('А', 'F'),
    ('П', 'G'),
    ('Р', 'H'),
    ('О', 'J'),
    ('Л', 'K'),
    ('Д', 'L'),
    ('Ж', ':'),
    ('Є', '"'),
    // Bottom row lowercase: ячсмитьбю. → zxcvbnm,./
    ('я', 'z'),
    ('ч', 'x'),
    ('с', 'c'),
    ('м', 'v'),
    ('и', 'b'),
    ('т', 'n'),
    ('ь', 'm'),
    ('б', ','),
    ('ю', '.'),
    ('.', '/'),
    // Bottom row uppercase: ЯЧСМИТЬБЮ, → ZXCVBNM<>?
    ('Я', 'Z'),
    ('Ч', 'X'),
    ('С', 'C'),
    ('М', 'V'),
    ('И', 'B'),
    ('Т', 'N'),
    ('Ь', 'M'),
    ('Б', '<'),
    ('Ю', '>'),
    (',', '?'),
    // Shifted digits: "№;:? → @#$^&
    ('"', '@'),
    ('№', '#'),
    (';', '$'),
    (':', '^'),
    ('?', '&'),
];

/// QWERTY → Russian ЙЦУКЕН
pub const ENG_TO_RUS: &[(char, char)] = &[
    // Top row lowercase: `qwertyuiop[] → ёйцукенгшщзхъ
    ('`', 'ё'),
    ('q', 'й'),
    ('w', 'ц'),
    ('e', 'у'),
    ('r', 'к'),
    ('t', 'е'),
    ('y', 'н'),
    ('u', 'г'),
    ('i', 'ш'),
    ('o', 'щ'),
    ('p', 'з'),
    ('[', 'х'),
    (']', 'ъ'),
    // Top row uppercase: ~QWERTYUIOP{}| → ЁЙЦУКЕНГШЩЗХЪ/
    ('~', 'Ё'),
    ('Q', 'Й'),
    ('W', 'Ц'),
    ('E', 'У'),
    ('R', 'К'),
    ('T', 'Е'),
    ('Y', 'Н'),
    ('U', 'Г'),
    ('I', 'Ш'),
    ('O', 'Щ'),
    ('P', 'З'),
    ('{', 'Х'),
    ('}', 'Ъ'),
    ('|', '/'),
    // Middle row lowercase: asdfghjkl;' → фывапролджэ
    ('a', 'ф'),
    ('s', 'ы'),
    ('d', 'в'),
    ('f', 'а'),
    ('g', 'п'),
    ('h', 'р'),
    ('j', 'о'),
    ('k', 'л'),
    ('l', 'д'),
    (';', 'ж'),
    ('\'', 'э'),
    // Middle row uppercase: ASDFGHJKL:" → ФЫВАПРОЛДЖЭ
    ('A', 'Ф'),
    ('S', 'Ы'),
    ('D', 'В'),
    ('F', 'А'),
    ('G', 'П'),
    ('H', 'Р'),
    ('J', 'О'),
    ('K', 'Л'),
    ('L', 'Д'),
    (':', 'Ж'),
    ('"', 'Э'),
    // Bottom row lowercase: zxcvbnm,./ → ячсмитьбю.
    ('z', 'я'),
    ('x', 'ч'),
    ('c', 'с'),
    ('v', 'м'),
    ('b', 'и'),
    ('n', 'т'),
    ('m', 'ь'),
    (',', 'б'),
    ('.', 'ю'),
    ('/', '.'),
    // Bottom row uppercase: ZXCVBNM<>? → ЯЧСМИТЬБЮ,
    ('Z', 'Я'),
    ('X', 'Ч'),
    ('C', 'С'),
    ('V', 'М'),
    ('B', 'И'),
    ('N', 'Т'),
    ('M', 'Ь'),
    ('<', 'Б'),
    ('>', 'Ю'),
    ('?', ','),
    // Shifted digits: @#$^& → "№;:?
    ('@', '"'),
    ('#', '№'),
    ('$', ';'),
    ('^', ':'),
    ('&', '?'),
];

/// Russian ЙЦУКЕН → QWERTY
pub const RUS_TO_ENG: &[(char, char)] = &[
    // Top row lowercase: ёйцукенгшщзхъ → `qwertyuiop[]
    ('ё', '`'),
    ('й', 'q'),
    ('ц', 'w'),
    ('у', 'e'),
    ('к', 'r'),
    ('е', 't'),
    ('н', 'y'),
    ('г', 'u'),
    ('ш', 'i'),
    ('щ', 'o'),
    ('з', 'p'),
    ('х', '['),
    ('ъ', ']'),
    // Top row uppercase: ЁЙЦУКЕНГШЩЗХЪ/ → ~QWERTYUIOP{}|
    ('Ё', '~'),
    ('Й', 'Q'),
    ('Ц', 'W'),
    ('У', 'E'),
    ('К', 'R'),
    ('Е', 'T'),
    ('Н', 'Y'),
    ('Г', 'U'),
    ('Ш', 'I'),
    ('Щ', 'O'),
    ('З', 'P'),
    ('Х', '{'),
    ('Ъ', '}'),
    ('/', '|'),
    // Middle row lowercase: фывапролджэ → asdfghjkl;'
    ('ф', 'a'),
    ('ы', 's'),
    ('в', 'd'),
    ('а', 'f'),
    ('п', 'g'),
    ('р', 'h'),
    ('о', 'j'),
    ('л', 'k'),
    ('д', 'l'),
    ('ж', ';'),
    ('э', '\''),
    // Middle row uppercase: ФЫВАПРОЛДЖЭ → ASDFGHJKL:"
    ('Ф', 'A'),
    ('Ы', 'S'),
    ('В', 'D'),
    ('А', 'F'),
    ('П', 'G'),
    ('Р', 'H'),
    ('О', 'J'),
    ('Л', 'K'),
    ('Д', 'L'),
    ('Ж', ':'),
    ('Э', '"'),
    // Bottom row lowercase: ячсмитьбю. → zxcvbnm,./
    ('я', 'z'),
    ('ч', 'x'),
    ('с', 'c'),
    ('м', 'v'),
    ('и', 'b'),
    ('т', 'n'),
    ('ь', 'm'),
    ('б', ','),
    ('ю', '.'),
    ('.', '/'),
    // Bottom row uppercase: ЯЧСМИТЬБЮ, → ZXCVBNM<>?
    ('Я', 'Z'),
    ('Ч', 'X'),
    ('С', 'C'),
    ('М', 'V'),
    ('И', 'B'),
    ('Т', 'N'),
    ('Ь', 'M'),
    ('Б', '<'),
    ('Ю', '>'),
    (',', '?'),
    // Shifted digits: "№;:? → @#$^&
    ('"', '@'),
    ('№', '#'),
    (';', '$'),
    (':', '^'),
    ('?', '&'),
];
