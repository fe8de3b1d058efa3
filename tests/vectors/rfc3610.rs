#![cfg(feature = "test-vectors")]

// RFC 3610 section 8, packet vectors #1 to #24. The first 8 or 12 bytes of each packet are
// the associated data, the rest is the payload.

use aesccm::{Aes, Ccm, Error, Key};
use hex_literal::hex;

struct TestVector {
    key: [u8; 16],
    nonce: [u8; 13],
    aad: &'static [u8],
    plaintext: &'static [u8],
    tag_len: usize,
    sealed: &'static [u8],
}

const KEY_A: [u8; 16] = hex!("C0C1C2C3C4C5C6C7C8C9CACBCCCDCECF");
const KEY_B: [u8; 16] = hex!("D7828D13B2B0BDC325A76236DF93CC6B");

const VECTORS: &[TestVector] = &[
    TestVector {
        key: KEY_A,
        nonce: hex!("00000003020100A0A1A2A3A4A5"),
        aad: &hex!("0001020304050607"),
        plaintext: &hex!("08090A0B0C0D0E0F101112131415161718191A1B1C1D1E"),
        tag_len: 8,
        sealed: &hex!("588C979A61C663D2F066D0C2C0F989806D5F6B61DAC38417E8D12CFDF926E0"),
    },
    TestVector {
        key: KEY_A,
        nonce: hex!("00000004030201A0A1A2A3A4A5"),
        aad: &hex!("0001020304050607"),
        plaintext: &hex!("08090A0B0C0D0E0F101112131415161718191A1B1C1D1E1F"),
        tag_len: 8,
        sealed: &hex!("72C91A36E135F8CF291CA894085C87E3CC15C439C9E43A3BA091D56E10400916"),
    },
    TestVector {
        key: KEY_A,
        nonce: hex!("00000005040302A0A1A2A3A4A5"),
        aad: &hex!("0001020304050607"),
        plaintext: &hex!("08090A0B0C0D0E0F101112131415161718191A1B1C1D1E1F20"),
        tag_len: 8,
        sealed: &hex!("51B1E5F44A197D1DA46B0F8E2D282AE871E838BB64DA8596574ADAA76FBD9FB0C5"),
    },
    TestVector {
        key: KEY_A,
        nonce: hex!("00000006050403A0A1A2A3A4A5"),
        aad: &hex!("000102030405060708090A0B"),
        plaintext: &hex!("0C0D0E0F101112131415161718191A1B1C1D1E"),
        tag_len: 8,
        sealed: &hex!("A28C6865939A9A79FAAA5C4C2A9D4A91CDAC8C96C861B9C9E61EF1"),
    },
    TestVector {
        key: KEY_A,
        nonce: hex!("00000007060504A0A1A2A3A4A5"),
        aad: &hex!("000102030405060708090A0B"),
        plaintext: &hex!("0C0D0E0F101112131415161718191A1B1C1D1E1F"),
        tag_len: 8,
        sealed: &hex!("DCF1FB7B5D9E23FB9D4E131253658AD86EBDCA3E51E83F077D9C2D93"),
    },
    TestVector {
        key: KEY_A,
        nonce: hex!("00000008070605A0A1A2A3A4A5"),
        aad: &hex!("000102030405060708090A0B"),
        plaintext: &hex!("0C0D0E0F101112131415161718191A1B1C1D1E1F20"),
        tag_len: 8,
        sealed: &hex!("6FC1B011F006568B5171A42D953D469B2570A4BD87405A0443AC91CB94"),
    },
    TestVector {
        key: KEY_A,
        nonce: hex!("00000009080706A0A1A2A3A4A5"),
        aad: &hex!("0001020304050607"),
        plaintext: &hex!("08090A0B0C0D0E0F101112131415161718191A1B1C1D1E"),
        tag_len: 10,
        sealed: &hex!("0135D1B2C95F41D5D1D4FEC185D166B8094E999DFED96C048C56602C97ACBB7490"),
    },
    TestVector {
        key: KEY_A,
        nonce: hex!("0000000A090807A0A1A2A3A4A5"),
        aad: &hex!("0001020304050607"),
        plaintext: &hex!("08090A0B0C0D0E0F101112131415161718191A1B1C1D1E1F"),
        tag_len: 10,
        sealed: &hex!("7B75399AC0831DD2F0BBD75879A2FD8F6CAE6B6CD9B7DB24C17B4433F434963F34B4"),
    },
    TestVector {
        key: KEY_A,
        nonce: hex!("0000000B0A0908A0A1A2A3A4A5"),
        aad: &hex!("0001020304050607"),
        plaintext: &hex!("08090A0B0C0D0E0F101112131415161718191A1B1C1D1E1F20"),
        tag_len: 10,
        sealed: &hex!("82531A60CC24945A4B8279181AB5C84DF21CE7F9B73F42E197EA9C07E56B5EB17E5F4E"),
    },
    TestVector {
        key: KEY_A,
        nonce: hex!("0000000C0B0A09A0A1A2A3A4A5"),
        aad: &hex!("000102030405060708090A0B"),
        plaintext: &hex!("0C0D0E0F101112131415161718191A1B1C1D1E"),
        tag_len: 10,
        sealed: &hex!("07342594157785152B074098330ABB141B947B566AA9406B4D999988DD"),
    },
    TestVector {
        key: KEY_A,
        nonce: hex!("0000000D0C0B0AA0A1A2A3A4A5"),
        aad: &hex!("000102030405060708090A0B"),
        plaintext: &hex!("0C0D0E0F101112131415161718191A1B1C1D1E1F"),
        tag_len: 10,
        sealed: &hex!("676BB20380B0E301E8AB79590A396DA78B834934F53AA2E9107A8B6C022C"),
    },
    TestVector {
        key: KEY_A,
        nonce: hex!("0000000E0D0C0BA0A1A2A3A4A5"),
        aad: &hex!("000102030405060708090A0B"),
        plaintext: &hex!("0C0D0E0F101112131415161718191A1B1C1D1E1F20"),
        tag_len: 10,
        sealed: &hex!("C0FFA0D6F05BDB67F24D43A4338D2AA4BED7B20E43CD1AA31662E7AD65D6DB"),
    },
    TestVector {
        key: KEY_B,
        nonce: hex!("00412B4EA9CDBE3C9696766CFA"),
        aad: &hex!("0BE1A88BACE018B1"),
        plaintext: &hex!("08E8CF97D820EA258460E96AD9CF5289054D895CEAC47C"),
        tag_len: 8,
        sealed: &hex!("4CB97F86A2A4689A877947AB8091EF5386A6FFBDD080F8E78CF7CB0CDDD7B3"),
    },
    TestVector {
        key: KEY_B,
        nonce: hex!("0033568EF7B2633C9696766CFA"),
        aad: &hex!("63018F76DC8A1BCB"),
        plaintext: &hex!("9020EA6F91BDD85AFA0039BA4BAFF9BFB79C7028949CD0EC"),
        tag_len: 8,
        sealed: &hex!("4CCB1E7CA981BEFAA0726C55D378061298C85C92814ABC33C52EE81D7D77C08A"),
    },
    TestVector {
        key: KEY_B,
        nonce: hex!("00103FE41336713C9696766CFA"),
        aad: &hex!("AA6CFA36CAE86B40"),
        plaintext: &hex!("B916E0EACC1C00D7DCEC68EC0B3BBB1A02DE8A2D1AA346132E"),
        tag_len: 8,
        sealed: &hex!("B1D23A2220DDC0AC900D9AA03C61FCF4A559A4417767089708A776796EDB723506"),
    },
    TestVector {
        key: KEY_B,
        nonce: hex!("00764C63B8058E3C9696766CFA"),
        aad: &hex!("D0D0735C531E1BECF049C244"),
        plaintext: &hex!("12DAAC5630EFA5396F770CE1A66B21F7B2101C"),
        tag_len: 8,
        sealed: &hex!("14D253C3967B70609B7CBB7C499160283245269A6F49975BCADEAF"),
    },
    TestVector {
        key: KEY_B,
        nonce: hex!("00F8B678094E3B3C9696766CFA"),
        aad: &hex!("77B60F011C03E1525899BCAE"),
        plaintext: &hex!("E88B6A46C78D63E52EB8C546EFB5DE6F75E9CC0D"),
        tag_len: 8,
        sealed: &hex!("5545FF1A085EE2EFBF52B2E04BEE1E2336C73E3F762C0C7744FE7E3C"),
    },
    TestVector {
        key: KEY_B,
        nonce: hex!("00D560912D3F703C9696766CFA"),
        aad: &hex!("CD9044D2B71FDB8120EA60C0"),
        plaintext: &hex!("6435ACBAFB11A82E2F071D7CA4A5EBD93A803BA87F"),
        tag_len: 8,
        sealed: &hex!("009769ECABDF48625594C59251E6035722675E04C847099E5AE0704551"),
    },
    TestVector {
        key: KEY_B,
        nonce: hex!("0042FFF8F1951C3C9696766CFA"),
        aad: &hex!("D85BC7E69F944FB8"),
        plaintext: &hex!("8A19B950BCF71A018E5E6701C91787659809D67DBEDD18"),
        tag_len: 10,
        sealed: &hex!("BC218DAA947427B6DB386A99AC1AEF23ADE0B52939CB6A637CF9BEC2408897C6BA"),
    },
    TestVector {
        key: KEY_B,
        nonce: hex!("00920F40E56CDC3C9696766CFA"),
        aad: &hex!("74A0EBC9069F5B37"),
        plaintext: &hex!("1761433C37C5A35FC1F39F406302EB907C6163BE38C98437"),
        tag_len: 10,
        sealed: &hex!("5810E6FD25874022E80361A478E3E9CF484AB04F447EFFF6F0A477CC2FC9BF548944"),
    },
    TestVector {
        key: KEY_B,
        nonce: hex!("0027CA0C7120BC3C9696766CFA"),
        aad: &hex!("44A3AA3AAE6475CA"),
        plaintext: &hex!("A434A8E58500C6E41530538862D686EA9E81301B5AE4226BFA"),
        tag_len: 10,
        sealed: &hex!("F2BEED7BC5098E83FEB5B31608F8E29C38819A89C8E776F1544D4151A4ED3A8B87B9CE"),
    },
    TestVector {
        key: KEY_B,
        nonce: hex!("005B8CCBCD9AF83C9696766CFA"),
        aad: &hex!("EC46BB63B02520C33C49FD70"),
        plaintext: &hex!("B96B49E21D621741632875DB7F6C9243D2D7C2"),
        tag_len: 10,
        sealed: &hex!("31D750A09DA3ED7FDDD49A2032AABF17EC8EBF7D22C8088C666BE5C197"),
    },
    TestVector {
        key: KEY_B,
        nonce: hex!("003EBE94044B9A3C9696766CFA"),
        aad: &hex!("47A65AC78B3D594227E85E71"),
        plaintext: &hex!("E2FCFBB880442C731BF95167C8FFD7895E337076"),
        tag_len: 10,
        sealed: &hex!("E882F1DBD38CE3EDA7C23F04DD65071EB41342ACDF7E00DCCEC7AE52987D"),
    },
    TestVector {
        key: KEY_B,
        nonce: hex!("008D493B30AE8B3C9696766CFA"),
        aad: &hex!("6E37A6EF546D955D34AB6059"),
        plaintext: &hex!("ABF21C0B02FEB88F856DF4A37381BCE3CC128517D4"),
        tag_len: 10,
        sealed: &hex!("F32905B88A641B04B9C9FFB58CC390900F3DA12AB16DCE9E82EFA16DA62059"),
    },
];

#[test]
fn rfc3610_seal_matches() -> aesccm::Result<()> {
    for (i, vector) in VECTORS.iter().enumerate() {
        let aes = Aes::new(&Key::try_from_slice(&vector.key)?);
        let mut ccm = Ccm::new(&aes, 13, vector.tag_len)?;
        let sealed = ccm.seal(&vector.nonce, vector.plaintext, vector.aad)?;
        assert_eq!(vector.sealed, &sealed[..], "packet vector #{}", i + 1);
    }
    Ok(())
}

#[test]
fn rfc3610_open_matches() -> aesccm::Result<()> {
    for (i, vector) in VECTORS.iter().enumerate() {
        let aes = Aes::new(&Key::try_from_slice(&vector.key)?);
        let mut ccm = Ccm::new(&aes, 13, vector.tag_len)?;
        let opened = ccm.open(&vector.nonce, vector.sealed, vector.aad)?;
        assert_eq!(vector.plaintext, &opened[..], "packet vector #{}", i + 1);
    }
    Ok(())
}

#[test]
fn rfc3610_reject_bad_tag() -> aesccm::Result<()> {
    for vector in VECTORS {
        let aes = Aes::new(&Key::try_from_slice(&vector.key)?);
        let mut ccm = Ccm::new(&aes, 13, vector.tag_len)?;

        let mut sealed = vector.sealed.to_vec();
        let last = sealed.len() - 1;
        sealed[last] ^= 0x01;

        assert!(matches!(
            ccm.open(&vector.nonce, &sealed, vector.aad),
            Err(Error::AuthenticationFailed)
        ));
    }
    Ok(())
}
