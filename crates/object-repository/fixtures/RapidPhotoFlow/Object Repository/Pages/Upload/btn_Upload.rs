<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Upload button to start photo upload</description>
   <name>btn_Upload</name>
   <tag></tag>
   <elementGuidId>upload-button</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//button[contains(text(), 'Upload') or contains(text(), 'upload')]</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>button[data-testid='upload-button']</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
