//! Filename-extension fallback matching.
//!
//! When content sniffing is inconclusive, the suffix after the last `.` of
//! the filename is case-folded to lowercase ASCII and looked up in a
//! compile-time table mapping extensions to (type, creator) pairs. The
//! lookup is exact: no prefix, partial, or wildcard matching.
//!
//! Creator codes target the applications a late-90s Mac would hand these
//! files to: `ttxt` SimpleText, `SITx` StuffIt Expander, `GKON`
//! GraphicConverter, `ogle` PictureViewer, `TVOD` MoviePlayer, `SCPL`
//! SoundApp, `MSWD` Word, `XCEL` Excel, `CWIE` CodeWarrior, and so on.

use phf::phf_map;

use super::types::{CodePair, FourCc};

/// Longest filename suffix (in bytes, after the last `.`) still treated as
/// an extension. Anything longer is reported as "no extension", which
/// deliberately rejects multi-dot technical names.
pub const MAX_EXTENSION_LEN: usize = 5;

/// Longest key present in [`EXTENSION_TABLE`]; longer lookups cannot match.
const MAX_KEY_LEN: usize = 7;

const fn codes(file_type: &[u8; 4], creator: &[u8; 4]) -> CodePair {
    CodePair::new(FourCc::new(*file_type), FourCc::new(*creator))
}

/// Compile-time extension table.
///
/// Keys are lowercase and unique by construction: a duplicate key is a
/// `phf` build error, not a runtime tie. A few keys exceed
/// [`MAX_EXTENSION_LEN`] and are therefore only reachable through a direct
/// [`lookup`], never through filename parsing.
static EXTENSION_TABLE: phf::Map<&'static str, CodePair> = phf_map! {
    "1st" => codes(b"TEXT", b"ttxt"),      // readme text
    "669" => codes(b"6669", b"SNPL"),      // 669 tracker module
    "8med" => codes(b"STrk", b"SCPL"),     // Amiga OctaMED
    "8svx" => codes(b"8SVX", b"SCPL"),     // Amiga 8-bit sound
    "aif" => codes(b"AIFF", b"SCPL"),      // AIFF audio
    "aifc" => codes(b"AIFC", b"SCPL"),     // compressed AIFF audio
    "aiff" => codes(b"AIFF", b"SCPL"),     // AIFF audio
    "al" => codes(b"ALAW", b"SCPL"),       // A-law audio
    "ani" => codes(b"ANIi", b"GKON"),      // animated NeoChrome
    "apd" => codes(b"TEXT", b"ALD3"),      // Aldus printer description
    "arc" => codes(b"mArc", b"SITx"),      // PC ARC archive
    "arj" => codes(b"BINA", b"DArj"),      // ARJ archive
    "arr" => codes(b"ARR ", b"GKON"),      // Amber ARR image
    "art" => codes(b"ART ", b"GKON"),      // First Publisher image
    "ascii" => codes(b"TEXT", b"ttxt"),    // ASCII text
    "asc" => codes(b"TEXT", b"ttxt"),      // ASCII text
    "asf" => codes(b"ASF_", b"Ms01"),      // NetShow stream
    "asm" => codes(b"TEXT", b"ttxt"),      // assembly source
    "asx" => codes(b"ASX_", b"Ms01"),      // NetShow playlist
    "a" => codes(b"TEXT", b"ttxt"),        // assembly source
    "au" => codes(b"ULAW", b"TVOD"),       // Sun audio
    "avi" => codes(b"VfW ", b"TVOD"),      // AVI movie
    "bar" => codes(b"BARF", b"S691"),      // Unix BAR archive
    "bas" => codes(b"TEXT", b"ttxt"),      // BASIC source
    "bat" => codes(b"TEXT", b"ttxt"),      // MS-DOS batch file
    "bga" => codes(b"BMPp", b"ogle"),      // OS/2 bitmap
    "bib" => codes(b"TEXT", b"ttxt"),      // BibTeX bibliography
    "binary" => codes(b"BINA", b"hDmp"),   // untyped binary
    "bin" => codes(b"BINA", b"SITx"),      // MacBinary
    "bld" => codes(b"BLD ", b"GKON"),      // BLD image
    "bmp" => codes(b"BMPp", b"ogle"),      // Windows bitmap
    "boo" => codes(b"TEXT", b"ttxt"),      // BOO-encoded text
    "bst" => codes(b"TEXT", b"ttxt"),      // BibTeX style
    "bum" => codes(b".bMp", b"GKON"),      // QuickDraw bitmap
    "bw" => codes(b"SGI ", b"GKON"),       // SGI greyscale image
    "bz" => codes(b"Bzp2", b"SITx"),       // bzip2 archive
    "cel" => codes(b"CEL ", b"GKON"),      // KISS cel
    "cgm" => codes(b"CGMm", b"GKON"),      // computer graphics metafile
    "class" => codes(b"Clss", b"CWIE"),    // Java class
    "clp" => codes(b"CLPp", b"GKON"),      // Windows clipboard
    "cmd" => codes(b"TEXT", b"ttxt"),      // OS/2 batch file
    "com" => codes(b"PCFA", b"SWIN"),      // MS-DOS executable
    "cpp" => codes(b"TEXT", b"CWIE"),      // C++ source
    "cp" => codes(b"TEXT", b"CWIE"),       // C++ source
    "cpt" => codes(b"PACT", b"SITx"),      // Compact Pro archive
    "csv" => codes(b"TEXT", b"XCEL"),      // comma-separated values
    "ct" => codes(b"..CT", b"GKON"),       // Scitex CT image
    "c" => codes(b"TEXT", b"KAHL"),        // C source
    "cur" => codes(b"CUR ", b"GKON"),      // Windows cursor
    "cut" => codes(b"Halo", b"GKON"),      // Dr. Halo image
    "cvs" => codes(b"drw2", b"DAD2"),      // Canvas drawing
    "cwj" => codes(b"CWSS", b"cwkj"),      // ClarisWorks document
    "dat" => codes(b"TCLl", b"GKON"),      // TCL image
    "dbf" => codes(b"COMP", b"FOX+"),      // dBase database
    "dcx" => codes(b"DCXx", b"GKON"),      // multi-page PCX
    "dif" => codes(b"TEXT", b"XCEL"),      // data interchange format
    "diz" => codes(b"TEXT", b"R*Ch"),      // BBS description file
    "dl" => codes(b"DL  ", b"AnVw"),       // DL animation
    "dll" => codes(b"PCFL", b"SWIN"),      // Windows DLL
    "doc" => codes(b"WDBN", b"MSWD"),      // Word document
    "dot" => codes(b"sDBN", b"MSWD"),      // Word template
    "dsk" => codes(b"dimg", b"dCpy"),      // DiskCopy image
    "dvi" => codes(b"ODVI", b"xdvi"),      // TeX DVI
    "dwt" => codes(b"TEXT", b"DmWr"),      // Dreamweaver template
    "dxf" => codes(b"TEXT", b"SWVL"),      // AutoCAD drawing
    "eps" => codes(b"EPSF", b"vgrd"),      // encapsulated PostScript
    "epsf" => codes(b"EPSF", b"vgrd"),     // encapsulated PostScript
    "etx" => codes(b"TEXT", b"ezVu"),      // SEText
    "evy" => codes(b"EVYD", b"ENVY"),      // Envoy document
    "exe" => codes(b"PCFA", b"SWIN"),      // MS-DOS executable
    "faq" => codes(b"TEXT", b"ttxt"),      // FAQ text
    "fit" => codes(b"FITS", b"GKON"),      // FITS image
    "fla" => codes(b"SPA ", b"MFL2"),      // Flash source
    "flc" => codes(b"FLI ", b"TVOD"),      // FLIC animation
    "fli" => codes(b"FLI ", b"TVOD"),      // FLI animation
    "fm" => codes(b"FMPR", b"FMPR"),       // FileMaker Pro database
    "for" => codes(b"TEXT", b"MPS "),      // Fortran source
    "fts" => codes(b"FITS", b"GKON"),      // FITS image
    "gem" => codes(b"GEM-", b"GKON"),      // GEM metafile
    "gif" => codes(b"GIFf", b"ogle"),      // GIF image
    "gl" => codes(b"GL  ", b"AnVw"),       // GL animation
    "grp" => codes(b"GRPp", b"GKON"),      // GRP image
    "gz" => codes(b"SIT!", b"SITx"),       // gzip archive
    "hcom" => codes(b"FSSD", b"SCPL"),     // SoundEdit audio
    "hpgl" => codes(b"HPGL", b"GKON"),     // HP GL/2 plot
    "hpp" => codes(b"TEXT", b"CWIE"),      // C++ header
    "hp" => codes(b"TEXT", b"CWIE"),       // C++ header
    "hqx" => codes(b"TEXT", b"SITx"),      // BinHex archive
    "hr" => codes(b"TR80", b"GKON"),       // TRS-80 HR image
    "h" => codes(b"TEXT", b"KAHL"),        // C header
    "html" => codes(b"TEXT", b"MOSS"),     // HTML page
    "htm" => codes(b"TEXT", b"MOSS"),      // HTML page
    "i3" => codes(b"TEXT", b"R*ch"),       // Modula-3 interface
    "ic1" => codes(b"IMAG", b"GKON"),      // Atari image
    "ic2" => codes(b"IMAG", b"GKON"),      // Atari image
    "ic3" => codes(b"IMAG", b"GKON"),      // Atari image
    "icn" => codes(b"ICO ", b"GKON"),      // Windows icon
    "ico" => codes(b"ICO ", b"GKON"),      // Windows icon
    "ief" => codes(b"IEF ", b"GKON"),      // IEF image
    "iff" => codes(b"ILBM", b"GKON"),      // Amiga IFF image
    "ilbm" => codes(b"ILBM", b"GKON"),     // Amiga ILBM image
    "image" => codes(b"dImg", b"ddsk"),    // DiskCopy image
    "img" => codes(b"dImg", b"ddsk"),      // DiskCopy image
    "ini" => codes(b"TEXT", b"ttxt"),      // Windows INI file
    "iso" => codes(b"rodh", b"ddsk"),      // ISO CD image
    "iss" => codes(b"ISS ", b"GKON"),      // ISS image
    "java" => codes(b"TEXT", b"CWIE"),     // Java source
    "jfif" => codes(b"JPEG", b"ogle"),     // JFIF image
    "jif" => codes(b"JIFf", b"GKON"),      // JIF99a image
    "jpeg" => codes(b"JPEG", b"ogle"),     // JPEG image
    "jpe" => codes(b"JPEG", b"ogle"),      // JPEG image
    "jpg" => codes(b"JPEG", b"ogle"),      // JPEG image
    "latex" => codes(b"TEXT", b"OTEX"),    // LaTeX source
    "lbm" => codes(b"ILBM", b"GKON"),      // Amiga IFF image
    "lha" => codes(b"LHA ", b"SITx"),      // LHArc archive
    "lwf" => codes(b"lwfF", b"GKON"),      // LuraWave image
    "lzh" => codes(b"LHA ", b"SITx"),      // LHArc archive
    "m1a" => codes(b"MPEG", b"TVOD"),      // MPEG-1 audio
    "m1s" => codes(b"MPEG", b"TVOD"),      // MPEG-1 system stream
    "m1v" => codes(b"M1V ", b"TVOD"),      // MPEG-1 video
    "m2" => codes(b"TEXT", b"R*ch"),       // Modula-2 source
    "m2v" => codes(b"MPG2", b"MPG2"),      // MPEG-2 video
    "m3" => codes(b"TEXT", b"R*ch"),       // Modula-3 source
    "mac" => codes(b"PICT", b"ogle"),      // PICT image
    "mak" => codes(b"TEXT", b"R*ch"),      // makefile
    "mbm" => codes(b"MBM ", b"GKON"),      // Psion 5 bitmap
    "mcw" => codes(b"WDBN", b"MSWD"),      // Word for Mac document
    "med" => codes(b"STrk", b"SCPL"),      // Amiga MED module
    "me" => codes(b"TEXT", b"ttxt"),       // readme text
    "mf" => codes(b"TEXT", b"*MF*"),       // Metafont source
    "midi" => codes(b"Midi", b"TVOD"),     // MIDI music
    "mid" => codes(b"Midi", b"TVOD"),      // MIDI music
    "mif" => codes(b"TEXT", b"Fram"),      // FrameMaker MIF
    "mime" => codes(b"TEXT", b"SITx"),     // MIME message
    "ml" => codes(b"TEXT", b"R*ch"),       // ML source
    "mod" => codes(b"STrk", b"SCPL"),      // MOD module
    "mol" => codes(b"TEXT", b"RSML"),      // MDL molfile
    "moov" => codes(b"MooV", b"TVOD"),     // QuickTime movie
    "mov" => codes(b"MooV", b"TVOD"),      // QuickTime movie
    "mp2" => codes(b"MPEG", b"TVOD"),      // MPEG-1 audio
    "mp3" => codes(b"MPG3", b"TVOD"),      // MPEG layer 3 audio
    "mpa" => codes(b"MPEG", b"TVOD"),      // MPEG-1 audio
    "mpeg" => codes(b"MPEG", b"TVOD"),     // MPEG movie
    "mpe" => codes(b"MPEG", b"TVOD"),      // MPEG movie
    "mpg" => codes(b"MPEG", b"TVOD"),      // MPEG movie
    "msp" => codes(b"MSPp", b"GKON"),      // Microsoft Paint image
    "mtm" => codes(b"MTM ", b"SNPL"),      // MultiMOD module
    "mwii" => codes(b"MW2D", b"MWII"),     // MacWrite II document
    "mw" => codes(b"MW2D", b"MWII"),       // MacWrite document
    "neo" => codes(b"NeoC", b"GKON"),      // Atari NeoChrome image
    "nfo" => codes(b"TEXT", b"ttxt"),      // info text
    "ngg" => codes(b"NGGC", b"GKON"),      // Nokia group graphic
    "nol" => codes(b"NOL ", b"GKON"),      // Nokia operator logo
    "nst" => codes(b"STrk", b"SCPL"),      // NoiseTracker module
    "obj" => codes(b"PCFL", b"SWIN"),      // DOS/Windows object file
    "oda" => codes(b"ODIF", b"ODA "),      // ODA document
    "okt" => codes(b"OKTA", b"SCPL"),      // Oktalyzer module
    "out" => codes(b"BINA", b"hDmp"),      // build output binary
    "ovl" => codes(b"PCFL", b"SWIN"),      // DOS/Windows overlay
    "pac" => codes(b"STAD", b"GKON"),      // Atari STAD image
    "pal" => codes(b"8BCT", b"8BIM"),      // color table
    "pas" => codes(b"TEXT", b"CWIE"),      // Pascal source
    "pbm" => codes(b"PPGM", b"GKON"),      // portable bitmap
    "pc1" => codes(b"Dega", b"GKON"),      // Atari Degas image
    "pc2" => codes(b"Dega", b"GKON"),      // Atari Degas image
    "pc3" => codes(b"Dega", b"GKON"),      // Atari Degas image
    "pcs" => codes(b"PICS", b"GKON"),      // animated PICTs
    "pct" => codes(b"PICT", b"ogle"),      // PICT image
    "pcx" => codes(b"PCXx", b"GKON"),      // PC Paintbrush image
    "pdb" => codes(b"TEXT", b"RSML"),      // Brookhaven PDB
    "pdf" => codes(b"PDF ", b"CARO"),      // PDF document
    "pdx" => codes(b"TEXT", b"ALD5"),      // printer description
    "pf" => codes(b"CSIT", b"SITx"),       // StuffIt private file
    "pgc" => codes(b"PGCF", b"GKON"),      // Atari PGC image
    "pgm" => codes(b"PPGM", b"GKON"),      // portable graymap
    "pi1" => codes(b"Dega", b"GKON"),      // Atari Degas image
    "pi2" => codes(b"Dega", b"GKON"),      // Atari Degas image
    "pi3" => codes(b"Dega", b"GKON"),      // Atari Degas image
    "pic" => codes(b"PICT", b"ogle"),      // PICT image
    "pics" => codes(b"PICS", b"GKON"),     // PICT sequence
    "pict" => codes(b"PICT", b"ogle"),     // PICT image
    "pit" => codes(b"PIT ", b"SITx"),      // PackIt archive
    "pkg" => codes(b"HBSF", b"SITx"),      // AppleLink package
    "pl" => codes(b"TEXT", b"McPL"),       // Perl source
    "plt" => codes(b"HPGL", b"GKON"),      // HP GL/2 plot
    "pm3" => codes(b"ALB3", b"ALD3"),      // PageMaker 3 layout
    "pm4" => codes(b"ALB4", b"ALD4"),      // PageMaker 4 layout
    "pm5" => codes(b"ALB5", b"ALD5"),      // PageMaker 5 layout
    "pm" => codes(b"PMpm", b"GKON"),       // X PixMap bitmap
    "png" => codes(b"PNG ", b"ogle"),      // PNG image
    "pntg" => codes(b"PNTG", b"ogle"),     // MacPaint image
    "ppd" => codes(b"TEXT", b"ALD5"),      // printer description
    "ppm" => codes(b"PPGM", b"GKON"),      // portable pixmap
    "prn" => codes(b"TEXT", b"R*ch"),      // printer output
    "psd" => codes(b"8BPS", b"8BIM"),      // Photoshop document
    "ps" => codes(b"TEXT", b"vgrd"),       // PostScript
    "pt4" => codes(b"ALT4", b"ALD4"),      // PageMaker 4 template
    "pt5" => codes(b"ALT5", b"ALD5"),      // PageMaker 5 template
    "p" => codes(b"TEXT", b"CWIE"),        // Pascal source
    "pxr" => codes(b"PXR ", b"8BIM"),      // Pixar image
    "qdv" => codes(b"QDVf", b"GKON"),      // QDV image
    "qt" => codes(b"MooV", b"TVOD"),       // QuickTime movie
    "qxd" => codes(b"XDOC", b"XPR3"),      // QuarkXPress document
    "qxt" => codes(b"XTMP", b"XPR3"),      // QuarkXPress template
    "raw" => codes(b"rodh", b"ddsk"),      // raw disk image
    "readme" => codes(b"TEXT", b"ttxt"),   // readme text
    "rgba" => codes(b"SGI ", b"GKON"),     // SGI image
    "rgb" => codes(b"SGI ", b"GKON"),      // SGI image
    "rib" => codes(b"TEXT", b"RINI"),      // RenderMan scene
    "rif" => codes(b"RIFF", b"GKON"),      // RIFF image
    "rle" => codes(b"RLE ", b"GKON"),      // RLE image
    "rme" => codes(b"TEXT", b"ttxt"),      // readme text
    "rpl" => codes(b"FRL!", b"REP!"),      // Replica document
    "rsc" => codes(b"rsrc", b"RSED"),      // resource file
    "rsrc" => codes(b"rsrc", b"RSED"),     // resource file
    "rtf" => codes(b"TEXT", b"MSWD"),      // rich text
    "rtx" => codes(b"TEXT", b"R*ch"),      // rich text
    "s3m" => codes(b"S3M ", b"SNPL"),      // ScreamTracker 3 module
    "scc" => codes(b"MSX ", b"GKON"),      // MSX image
    "scg" => codes(b"RIX3", b"GKON"),      // ColoRIX image
    "sci" => codes(b"RIX3", b"GKON"),      // ColoRIX image
    "scp" => codes(b"RIX3", b"GKON"),      // ColoRIX image
    "scr" => codes(b"RIX3", b"GKON"),      // ColoRIX image
    "scu" => codes(b"RIX3", b"GKON"),      // ColoRIX image
    "sea" => codes(b"APPL", b"????"),      // self-extracting archive
    "sf" => codes(b"IRCM", b"SDHK"),       // IRCAM audio
    "sgi" => codes(b".SGI", b"ogle"),      // SGI image
    "shar" => codes(b"TEXT", b"UnSh"),     // shell archive
    "sha" => codes(b"TEXT", b"UnSh"),      // shell archive
    "shp" => codes(b"SHPp", b"GKON"),      // Printmaster icon
    "sithqx" => codes(b"TEXT", b"SITx"),   // BinHexed StuffIt archive
    "sit" => codes(b"SIT!", b"SITx"),      // StuffIt archive
    "six" => codes(b"SIXE", b"GKON"),      // Sixel image
    "slk" => codes(b"TEXT", b"XCEL"),      // SYLK spreadsheet
    "snd" => codes(b"BINA", b"SCPL"),      // sound data
    "spc" => codes(b"Spec", b"GKON"),      // Atari Spectrum image
    "sr" => codes(b"SUNn", b"GKON"),       // Sun raster image
    "sty" => codes(b"TEXT", b"*TEX"),      // TeX style
    "sun" => codes(b"SUNn", b"GKON"),      // Sun raster image
    "sup" => codes(b"SCRN", b"GKON"),      // startup screen
    "svx" => codes(b"8SVX", b"SCPL"),      // Amiga IFF sound
    "swf" => codes(b"SWFL", b"SWF2"),      // Flash animation
    "syk" => codes(b"TEXT", b"XCEL"),      // SYLK spreadsheet
    "sylk" => codes(b"TEXT", b"XCEL"),     // SYLK spreadsheet
    "targa" => codes(b"TPIC", b"GKON"),    // Targa image
    "tar" => codes(b"TARF", b"SITx"),      // tar archive
    "taz" => codes(b"ZIVU", b"SITx"),      // compressed tar archive
    "texinfo" => codes(b"TEXT", b"OTEX"),  // Texinfo document
    "texi" => codes(b"TEXT", b"OTEX"),     // Texinfo document
    "tex" => codes(b"TEXT", b"OTEX"),      // TeX document
    "text" => codes(b"TEXT", b"ttxt"),     // ASCII text
    "tga" => codes(b"TPIC", b"GKON"),      // Targa image
    "tgz" => codes(b"Gzip", b"SITx"),      // gzipped tar archive
    "tiff" => codes(b"TIFF", b"ogle"),     // TIFF image
    "tif" => codes(b"TIFF", b"ogle"),      // TIFF image
    "tny" => codes(b"TINY", b"GKON"),      // Atari TINY image
    "toast" => codes(b"CDr3", b"GImg"),    // Toast CD image
    "tsv" => codes(b"TEXT", b"XCEL"),      // tab-separated values
    "tx8" => codes(b"TEXT", b"ttxt"),      // 8-bit ASCII text
    "txt" => codes(b"TEXT", b"ttxt"),      // ASCII text
    "ul" => codes(b"ULAW", b"TVOD"),       // mu-law audio
    "url" => codes(b"AURL", b"Arch"),      // URL bookmark
    "uue" => codes(b"TEXT", b"SITx"),      // uuencoded data
    "uu" => codes(b"TEXT", b"SITx"),       // uuencoded data
    "vff" => codes(b"VFFf", b"GKON"),      // DESR VFF image
    "vga" => codes(b"BMPp", b"ogle"),      // OS/2 bitmap
    "voc" => codes(b"VOC ", b"SCPL"),      // Creative Voice audio
    "vpb" => codes(b"VPB ", b"GKON"),      // Quantel VPB image
    "w51" => codes(b".WP5", b"WPC2"),      // WordPerfect 5.1 document
    "wav" => codes(b"WAVE", b"TVOD"),      // WAV audio
    "wbmp" => codes(b"WBMP", b"GKON"),     // wireless bitmap
    "wk1" => codes(b"XLBN", b"XCEL"),      // Lotus 1-2-3 spreadsheet
    "wks" => codes(b"XLBN", b"XCEL"),      // Lotus 1-2-3 spreadsheet
    "wmf" => codes(b"WMF ", b"GKON"),      // Windows metafile
    "wp4" => codes(b".WP4", b"WPC2"),      // WordPerfect 4 document
    "wp5" => codes(b".WP5", b"WPC2"),      // WordPerfect 5 document
    "wp6" => codes(b".WP6", b"WPC2"),      // WordPerfect 6 document
    "wpg" => codes(b"WPGf", b"GKON"),      // WordPerfect graphic
    "wpm" => codes(b"WPD1", b"WPC2"),      // WordPerfect for Mac
    "wp" => codes(b".WP5", b"WPC2"),       // WordPerfect document
    "wri" => codes(b"WDBN", b"MSWD"),      // Windows Write document
    "wve" => codes(b"BINA", b"SCPL"),      // Psion audio
    "x10" => codes(b"XWDd", b"GKON"),      // X Window dump
    "x11" => codes(b"XWDd", b"GKON"),      // X Window dump
    "xbm" => codes(b"XBM ", b"GKON"),      // X bitmap
    "x-face" => codes(b"TEXT", b"GKON"),   // X-Face image
    "xlc" => codes(b"XLC ", b"XCEL"),      // Excel chart
    "xlm" => codes(b"XLM ", b"XCEL"),      // Excel macro
    "xls" => codes(b"XLS ", b"XCEL"),      // Excel spreadsheet
    "xlw" => codes(b"XLW ", b"XCEL"),      // Excel workspace
    "xl" => codes(b"XLS ", b"XCEL"),       // Excel spreadsheet
    "xm" => codes(b"XM  ", b"SNPL"),       // FastTracker module
    "xpm" => codes(b"XPM ", b"GKON"),      // X pixmap
    "xwd" => codes(b"XWDd", b"GKON"),      // X Window dump
    "zip" => codes(b"ZIP ", b"SITx"),      // Zip archive
    "zoo" => codes(b"Zoo ", b"Booz"),      // Zoo archive
    "z" => codes(b"ZIVU", b"SITx"),        // Unix compress archive
};

/// Extract the extension of a filename: the substring after the last `.`.
///
/// Returns `None` when the filename has no dot, when the dot is the final
/// character, or when the suffix is longer than [`MAX_EXTENSION_LEN`]
/// bytes. Case is preserved; folding happens at lookup time.
///
/// # Examples
///
/// ```rust
/// use loquat::classify::extension_of;
///
/// assert_eq!(extension_of("archive.tar.gz"), Some("gz"));
/// assert_eq!(extension_of("README"), None);
/// assert_eq!(extension_of("name.toolong"), None);
/// ```
pub fn extension_of(filename: &str) -> Option<&str> {
    let dot = memchr::memrchr(b'.', filename.as_bytes())?;
    let suffix = &filename[dot + 1..];
    if suffix.is_empty() || suffix.len() > MAX_EXTENSION_LEN {
        return None;
    }
    Some(suffix)
}

/// Look up an extension in the table, folding ASCII case.
///
/// The lookup is exact and case-insensitive: `"TXT"`, `"txt"` and `"Txt"`
/// all resolve to the same entry.
pub fn lookup(ext: &str) -> Option<CodePair> {
    if ext.is_empty() || ext.len() > MAX_KEY_LEN {
        return None;
    }
    let mut folded = [0u8; MAX_KEY_LEN];
    folded[..ext.len()].copy_from_slice(ext.as_bytes());
    folded[..ext.len()].make_ascii_lowercase();
    // ASCII folding preserves UTF-8 validity.
    let key = std::str::from_utf8(&folded[..ext.len()]).ok()?;
    EXTENSION_TABLE.get(key).copied()
}

/// Classify a filename by its extension alone.
pub fn match_filename(filename: &str) -> Option<CodePair> {
    lookup(extension_of(filename)?)
}
