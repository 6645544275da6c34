/// バイトオーダー変換とバイトフィールド定義
/// ワイヤ上の多バイト値は常にリトルエンディアン

/// ホストがビッグエンディアンかどうか
///
/// コンパイル対象のターゲットで決まる定数。
pub const fn is_host_big_endian() -> bool {
    cfg!(target_endian = "big")
}

/// リトルエンディアンの4バイトをホスト順のu32として読み出す
///
/// Args:
///     bytes: 元データ
///     offset: 読み出し開始位置
///
/// Returns:
///     範囲外なら None
pub fn read_u32_le(bytes: &[u8], offset: usize) -> Option<u32> {
    let end = offset.checked_add(4)?;
    let word: [u8; 4] = bytes.get(offset..end)?.try_into().ok()?;
    Some(wire_word_to_host(u32::from_ne_bytes(word)))
}

/// リトルエンディアンのIEEE-754単精度浮動小数点を読み出す
///
/// ビットパターンを経由するため、ホストのエンディアンに関係なく同じ値になる。
pub fn read_f32_le(bytes: &[u8], offset: usize) -> Option<f32> {
    read_u32_le(bytes, offset).map(f32::from_bits)
}

/// u32をリトルエンディアンで書き込む
///
/// 範囲外なら何もせず false を返す。
pub fn write_u32_le(value: u32, output: &mut [u8], offset: usize) -> bool {
    let Some(end) = offset.checked_add(4) else {
        return false;
    };
    match output.get_mut(offset..end) {
        Some(slot) => {
            slot.copy_from_slice(&value.to_le_bytes());
            true
        }
        None => false,
    }
}

/// f32をリトルエンディアンで書き込む
pub fn write_f32_le(value: f32, output: &mut [u8], offset: usize) -> bool {
    write_u32_le(value.to_bits(), output, offset)
}

/// ホスト順で読んだワイヤ上のワードをホストの値に変換する
///
/// ホストがビッグエンディアンのときだけバイトを入れ替える。
pub fn wire_word_to_host(raw: u32) -> u32 {
    if is_host_big_endian() {
        raw.swap_bytes()
    } else {
        raw
    }
}

/// バイトフィールドの定義構造体
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteField {
    pub offset: usize,
    pub length: usize,
    pub name: String,
}

impl ByteField {
    /// 新しいバイトフィールドを作成
    pub fn new(name: &str, offset: usize, length: usize) -> Self {
        Self {
            offset,
            length,
            name: name.to_string(),
        }
    }

    /// このフィールドのバイト列を取り出す
    pub fn slice<'a>(&self, data: &'a [u8]) -> Option<&'a [u8]> {
        data.get(self.offset..self.end())
    }

    /// このフィールドの終了位置を計算
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

/// パケットフィールドマネージャー
#[derive(Debug, Clone)]
pub struct PacketFields {
    fields: Vec<ByteField>,
    total_bytes: usize,
}

impl PacketFields {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            total_bytes: 0,
        }
    }

    /// フィールドを末尾に追加（パディングなし）
    pub fn add_field(&mut self, name: &str, length: usize) {
        let field = ByteField::new(name, self.total_bytes, length);
        self.total_bytes = field.end();
        self.fields.push(field);
    }

    /// フィールドを名前で検索
    pub fn get_field(&self, name: &str) -> Option<&ByteField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn get_all_fields(&self) -> &[ByteField] {
        &self.fields
    }

    pub fn total_bytes(&self) -> usize {
        self.total_bytes
    }
}

impl Default for PacketFields {
    fn default() -> Self {
        Self::new()
    }
}
