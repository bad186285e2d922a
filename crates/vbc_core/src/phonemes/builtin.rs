//! Built-in Japanese kana table.
//!
//! Used when no phoneme-group file is configured. The table is free of
//! collisions, so it is used as-is without resolution. Vowel-only kana and
//! the moraic nasal map to themselves.

use super::types::{PhonemePair, PhonemeTable};

/// `label,consonant,vowel` per line.
const DEFAULT_TABLE: &str = "\
あ,a,a
い,i,i
う,u,u
え,e,e
お,o,o
ん,N,N
か,k,a
き,k,i
く,k,u
け,k,e
こ,k,o
が,g,a
ぎ,g,i
ぐ,g,u
げ,g,e
ご,g,o
さ,s,a
し,sh,i
す,s,u
せ,s,e
そ,s,o
ざ,z,a
じ,j,i
ず,z,u
ぜ,z,e
ぞ,z,o
た,t,a
ち,ch,i
つ,ts,u
て,t,e
と,t,o
だ,d,a
で,d,e
ど,d,o
な,n,a
に,n,i
ぬ,n,u
ね,n,e
の,n,o
は,h,a
ひ,h,i
ふ,f,u
へ,h,e
ほ,h,o
ば,b,a
び,b,i
ぶ,b,u
べ,b,e
ぼ,b,o
ぱ,p,a
ぴ,p,i
ぷ,p,u
ぺ,p,e
ぽ,p,o
ま,m,a
み,m,i
む,m,u
め,m,e
も,m,o
や,y,a
ゆ,y,u
よ,y,o
ら,r,a
り,r,i
る,r,u
れ,r,e
ろ,r,o
わ,w,a
を,w,o
きゃ,ky,a
きゅ,ky,u
きょ,ky,o
ぎゃ,gy,a
ぎゅ,gy,u
ぎょ,gy,o
しゃ,sh,a
しゅ,sh,u
しぇ,sh,e
しょ,sh,o
じゃ,j,a
じゅ,j,u
じぇ,j,e
じょ,j,o
ちゃ,ch,a
ちゅ,ch,u
ちぇ,ch,e
ちょ,ch,o
にゃ,ny,a
にゅ,ny,u
にょ,ny,o
ひゃ,hy,a
ひゅ,hy,u
ひょ,hy,o
びゃ,by,a
びゅ,by,u
びょ,by,o
ぴゃ,py,a
ぴゅ,py,u
ぴょ,py,o
みゃ,my,a
みゅ,my,u
みょ,my,o
りゃ,ry,a
りゅ,ry,u
りょ,ry,o
つぁ,ts,a
つぃ,ts,i
つぇ,ts,e
つぉ,ts,o
てぃ,t,i
とぅ,t,u
でぃ,d,i
どぅ,d,u
ふぁ,f,a
ふぃ,f,i
ふぇ,f,e
ふぉ,f,o
うぃ,w,i
うぇ,w,e
いぇ,y,e
";

/// The built-in table, in listing order.
pub fn default_table() -> PhonemeTable {
    let mut table = PhonemeTable::new();
    for line in DEFAULT_TABLE.lines() {
        let mut fields = line.split(',');
        if let (Some(label), Some(consonant), Some(vowel)) = (fields.next(), fields.next(), fields.next()) {
            table.insert(label, PhonemePair::new(consonant, vowel));
        }
    }
    table
}
