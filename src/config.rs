pub const CHAR_BASE_PATH: &str = "chinese-dictionary/character/char_base.json";
pub const CHAIZI_PATH: &str = "chaizi/chaizi-jt.txt";
pub const OUTPUT_PATH: &str = "hanzi_data.json";

/// Separates the character from its decompositions and the decompositions from each other
pub const CHAIZI_FIELD_SEP: char = '\t';
/// Separates the components inside a single decomposition
pub const CHAIZI_COMPONENT_SEP: char = ' ';

pub const CHAR_FIELD: &str = "char";
pub const PINYIN_FIELD: &str = "pinyin";
pub const VARIANT_FIELD: &str = "variant";
pub const CHAIZI_FIELD: &str = "chaizi";

/// Fields every record needs for consumers of the merged file (besides "char")
pub const REQUIRED_FIELDS: [&str; 5] = ["index", "strokes", "radicals", "frequency", PINYIN_FIELD];

pub const HANZI_DB_SCHEMA: &str = r#"

PRAGMA user_version = 1;

/* One row per merged record, in output order. data holds the complete record as JSON. */
CREATE TABLE IF NOT EXISTS "hanzi" (
	"id" INTEGER NOT NULL UNIQUE,
	"rank" INTEGER NOT NULL,
	"char" TEXT NOT NULL,
	"data" TEXT NOT NULL,
	PRIMARY KEY("id")
);

CREATE INDEX IF NOT EXISTS "hanzi_index_0"
ON "hanzi" ("char");
/* pinyin with tone number, e.g. zhong1 */
CREATE TABLE IF NOT EXISTS "hanzi_pinyin" (
	"id" INTEGER NOT NULL UNIQUE,
	"hanzi_id" INTEGER NOT NULL,
	"rank" INTEGER NOT NULL,
	"pinyin" TEXT NOT NULL,
	PRIMARY KEY("id"),
	FOREIGN KEY ("hanzi_id") REFERENCES "hanzi"("id")
	ON UPDATE NO ACTION ON DELETE NO ACTION
);

CREATE INDEX IF NOT EXISTS "hanzi_pinyin_index_0"
ON "hanzi_pinyin" ("pinyin");
/* decomposition into components, all components concatenated */
CREATE TABLE IF NOT EXISTS "hanzi_chaizi" (
	"id" INTEGER NOT NULL UNIQUE,
	"hanzi_id" INTEGER NOT NULL,
	"rank" INTEGER NOT NULL,
	"chaizi" TEXT NOT NULL,
	PRIMARY KEY("id"),
	FOREIGN KEY ("hanzi_id") REFERENCES "hanzi"("id")
	ON UPDATE NO ACTION ON DELETE NO ACTION
);

CREATE INDEX IF NOT EXISTS "hanzi_chaizi_index_0"
ON "hanzi_chaizi" ("hanzi_id");

/* Views (for manual browsing) */
CREATE VIEW IF NOT EXISTS char_pinyin_chaizi AS
SELECT
    h.char,
    (SELECT GROUP_CONCAT(p.pinyin, ' ') FROM hanzi_pinyin p WHERE p.hanzi_id = h.id) AS pinyin,
    (SELECT GROUP_CONCAT(c.chaizi, ' ') FROM hanzi_chaizi c WHERE c.hanzi_id = h.id) AS chaizi
FROM hanzi h
ORDER BY h.rank;

"#;
